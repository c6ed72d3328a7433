//! Identifier and clock ports
//!
//! Injected capabilities so the use cases stay deterministic under test.
//! Neither has side effects and neither fails.

use chrono::{DateTime, Utc};

/// Provider of fresh unique identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Provider of the current wall-clock time
pub trait DateGenerator: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
