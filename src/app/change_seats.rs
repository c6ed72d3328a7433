//! ChangeSeats use case
//!
//! Applies a seat-count change to an existing webinar, enforcing ownership.

use std::sync::Arc;

use crate::domain::entities::{UserId, WebinarChanges, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::error::{AppError, DomainError};

/// Input for changing a webinar's seat count
///
/// `organizer_id` is the identity of the requester, supplied by the caller.
#[derive(Debug, Clone)]
pub struct ChangeSeatsCommand {
    pub webinar_id: WebinarId,
    pub organizer_id: UserId,
    pub seats: i32,
}

/// Use case for changing a webinar's seat count
pub struct ChangeSeats<R>
where
    R: WebinarRepository,
{
    webinars: Arc<R>,
}

impl<R> ChangeSeats<R>
where
    R: WebinarRepository,
{
    pub fn new(webinars: Arc<R>) -> Self {
        Self { webinars }
    }

    /// Change the seat count of an existing webinar
    ///
    /// Fails before any write on: unknown webinar (NotFound), requester not
    /// the organizer (NotOrganizer), seats outside the entity bound
    /// (Validation). The read-modify-write is not transactional; concurrent
    /// changes to the same webinar are last-write-wins.
    pub async fn execute(&self, command: ChangeSeatsCommand) -> Result<(), AppError> {
        let mut webinar = self
            .webinars
            .find_by_id(&command.webinar_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(command.webinar_id.to_string()))?;

        if webinar.organizer_id() != &command.organizer_id {
            return Err(DomainError::NotOrganizer.into());
        }

        webinar.update(WebinarChanges {
            seats: Some(command.seats),
        })?;

        self.webinars.update(&webinar).await?;

        tracing::info!(webinar_id = %webinar.id(), seats = command.seats, "seats updated");

        Ok(())
    }
}
