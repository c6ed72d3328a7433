//! Application layer
//!
//! Contains the use cases. Use cases coordinate between domain entities,
//! ports, and external systems; they never swallow errors.

pub mod change_seats;
pub mod organize_webinars;

pub use change_seats::{ChangeSeats, ChangeSeatsCommand};
pub use organize_webinars::{OrganizeWebinars, OrganizeWebinarsCommand};
