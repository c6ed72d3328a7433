//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks over mockall: they are explicit, easy to debug, and this
//! crate has exactly one repository port to fake.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
