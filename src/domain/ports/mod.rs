//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod generators;
pub mod repositories;

pub use generators::{DateGenerator, IdGenerator};
pub use repositories::WebinarRepository;
