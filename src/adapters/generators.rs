//! Production id and clock adapters

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ports::{DateGenerator, IdGenerator};

/// Generates globally-unique ids (UUID v4)
#[derive(Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Reads the system wall clock
#[derive(Default)]
pub struct SystemDateGenerator;

impl DateGenerator for SystemDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
