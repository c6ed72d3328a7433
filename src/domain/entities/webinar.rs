//! Webinar domain entity
//!
//! The webinar owns validation of its own invariants: the seats bound and a
//! non-empty title are checked on construction and on every update. The
//! scheduling lead-time rule belongs to the organize use case and is only
//! exposed here as a predicate.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Inclusive lower bound for the seat count
pub const MIN_SEATS: i32 = 1;
/// Inclusive upper bound for the seat count
pub const MAX_SEATS: i32 = 1000;

/// Unique identifier for a webinar (opaque string, assigned by an IdGenerator)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebinarId(pub String);

impl WebinarId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WebinarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WebinarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for WebinarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user (the organizer or a requester)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Partial set of mutable webinar fields
///
/// Currently only `seats` is mutable through the public use cases.
#[derive(Debug, Clone, Default)]
pub struct WebinarChanges {
    pub seats: Option<i32>,
}

/// A scheduled webinar with seat capacity and an owning organizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: i32,
}

impl Webinar {
    /// Construct a new webinar, enforcing the entity invariants
    pub fn new(
        id: WebinarId,
        organizer_id: UserId,
        title: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        seats: i32,
    ) -> Result<Self, DomainError> {
        let webinar = Self {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        };
        webinar.validate()?;
        Ok(webinar)
    }

    /// Rebuild a webinar from a persisted row without re-validating
    ///
    /// Rows passed validation when they were written; the persistence
    /// adapter is the only caller.
    pub(crate) fn hydrate(
        id: WebinarId,
        organizer_id: UserId,
        title: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        seats: i32,
    ) -> Self {
        Self {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        }
    }

    /// Apply a partial change set and re-validate the resulting state
    pub fn update(&mut self, changes: WebinarChanges) -> Result<(), DomainError> {
        let mut updated = self.clone();
        if let Some(seats) = changes.seats {
            updated.seats = seats;
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Whether the webinar starts less than `min_lead` after `now`
    pub fn is_too_soon(&self, now: DateTime<Utc>, min_lead: Duration) -> bool {
        self.start_date < now + min_lead
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.seats < MIN_SEATS || self.seats > MAX_SEATS {
            return Err(DomainError::Validation(format!(
                "seats must be between {} and {}, got {}",
                MIN_SEATS, MAX_SEATS, self.seats
            )));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn seats(&self) -> i32 {
        self.seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_webinar(seats: i32) -> Result<Webinar, DomainError> {
        Webinar::new(
            WebinarId::from("webinar-1"),
            UserId::from("user-1"),
            "Rust for Web Developers".to_string(),
            "2026-06-01T10:00:00Z".parse().unwrap(),
            "2026-06-01T12:00:00Z".parse().unwrap(),
            seats,
        )
    }

    #[test]
    fn accepts_seats_at_lower_bound() {
        assert!(make_webinar(1).is_ok());
    }

    #[test]
    fn accepts_seats_at_upper_bound() {
        assert!(make_webinar(1000).is_ok());
    }

    #[test]
    fn rejects_zero_seats() {
        let err = make_webinar(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_negative_seats() {
        assert!(make_webinar(-5).is_err());
    }

    #[test]
    fn rejects_seats_above_upper_bound() {
        let err = make_webinar(1001).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_empty_title() {
        let result = Webinar::new(
            WebinarId::from("webinar-1"),
            UserId::from("user-1"),
            "   ".to_string(),
            "2026-06-01T10:00:00Z".parse().unwrap(),
            "2026-06-01T12:00:00Z".parse().unwrap(),
            100,
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn update_applies_valid_seat_change() {
        let mut webinar = make_webinar(10).unwrap();
        webinar
            .update(WebinarChanges { seats: Some(30) })
            .unwrap();
        assert_eq!(webinar.seats(), 30);
    }

    #[test]
    fn update_rejects_out_of_range_seats_and_keeps_state() {
        let mut webinar = make_webinar(10).unwrap();
        let result = webinar.update(WebinarChanges { seats: Some(2000) });
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(webinar.seats(), 10);
    }

    #[test]
    fn empty_change_set_is_a_no_op() {
        let mut webinar = make_webinar(10).unwrap();
        webinar.update(WebinarChanges::default()).unwrap();
        assert_eq!(webinar.seats(), 10);
    }

    #[test]
    fn too_soon_when_start_is_within_lead_time() {
        let webinar = make_webinar(10).unwrap();
        let now = "2026-05-31T10:00:00Z".parse().unwrap();
        assert!(webinar.is_too_soon(now, Duration::days(3)));
    }

    #[test]
    fn not_too_soon_when_start_is_exactly_at_lead_time() {
        let webinar = make_webinar(10).unwrap();
        let now = "2026-05-29T10:00:00Z".parse().unwrap();
        assert!(!webinar.is_too_soon(now, Duration::days(3)));
    }

    #[test]
    fn not_too_soon_when_start_is_far_out() {
        let webinar = make_webinar(10).unwrap();
        let now = "2026-01-01T00:00:00Z".parse().unwrap();
        assert!(!webinar.is_too_soon(now, Duration::days(3)));
    }
}
