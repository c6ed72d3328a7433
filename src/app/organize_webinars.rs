//! OrganizeWebinars use case
//!
//! Validates and creates a new webinar. The id and the notion of "now" come
//! from injected generators so the use case is deterministic under test.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{UserId, Webinar, WebinarId};
use crate::domain::ports::{DateGenerator, IdGenerator, WebinarRepository};
use crate::error::AppError;

/// Input for organizing a webinar
///
/// The organizer id is supplied by the caller context (e.g., the
/// authenticated user of the HTTP layer).
#[derive(Debug, Clone)]
pub struct OrganizeWebinarsCommand {
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Use case for organizing (creating) webinars
pub struct OrganizeWebinars<R, I, D>
where
    R: WebinarRepository,
    I: IdGenerator,
    D: DateGenerator,
{
    webinars: Arc<R>,
    ids: Arc<I>,
    dates: Arc<D>,
    min_lead: Duration,
}

impl<R, I, D> OrganizeWebinars<R, I, D>
where
    R: WebinarRepository,
    I: IdGenerator,
    D: DateGenerator,
{
    pub fn new(webinars: Arc<R>, ids: Arc<I>, dates: Arc<D>, min_lead_days: i64) -> Self {
        Self {
            webinars,
            ids,
            dates,
            min_lead: Duration::days(min_lead_days),
        }
    }

    /// Create a new webinar and return its id
    ///
    /// Entity invariants (seats bound, non-empty title) are enforced by
    /// construction; the scheduling rule is checked against the injected
    /// clock before the single repository write.
    pub async fn execute(&self, command: OrganizeWebinarsCommand) -> Result<WebinarId, AppError> {
        let id = WebinarId(self.ids.generate());

        let webinar = Webinar::new(
            id,
            command.organizer_id,
            command.title,
            command.start_date,
            command.end_date,
            command.seats,
        )?;

        let now = self.dates.now();
        if webinar.is_too_soon(now, self.min_lead) {
            return Err(crate::error::DomainError::TooSoon {
                min_lead_days: self.min_lead.num_days(),
            }
            .into());
        }

        self.webinars.create(&webinar).await?;

        tracing::info!(webinar_id = %webinar.id(), organizer_id = %webinar.organizer_id(), "webinar organized");

        Ok(webinar.id().clone())
    }
}
