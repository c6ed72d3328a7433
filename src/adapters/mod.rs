//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod generators;
pub mod postgres;

pub use generators::{SystemDateGenerator, UuidIdGenerator};
pub use postgres::PostgresWebinarRepository;
