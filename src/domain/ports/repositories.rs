//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Webinar, WebinarId};
use crate::error::DomainError;

/// Repository for Webinar entities
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Persist a new webinar keyed by its id
    ///
    /// Fails with `DomainError::AlreadyExists` if a record with the same id
    /// is already stored.
    async fn create(&self, webinar: &Webinar) -> Result<(), DomainError>;

    /// Find a webinar by id; `None` for a missing record, never an error
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, DomainError>;

    /// Persist the current in-memory state of an existing webinar,
    /// overwriting all mutable fields
    ///
    /// Fails with `DomainError::NotFound` if the record does not exist.
    async fn update(&self, webinar: &Webinar) -> Result<(), DomainError>;
}
