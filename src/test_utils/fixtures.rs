//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid entity that can be customized.

use crate::domain::entities::{UserId, Webinar, WebinarId};

/// Create a test webinar with default values (owned by "test-user")
pub fn test_webinar() -> Webinar {
    Webinar::new(
        WebinarId::from("test-webinar"),
        UserId::from("test-user"),
        "Webinar Test".to_string(),
        "2026-06-01T10:00:00Z".parse().unwrap(),
        "2026-06-01T12:00:00Z".parse().unwrap(),
        10,
    )
    .unwrap()
}

/// Create a test webinar owned by a specific organizer
pub fn test_webinar_owned_by(organizer_id: &str) -> Webinar {
    Webinar::new(
        WebinarId::from("test-webinar"),
        UserId::from(organizer_id),
        "Webinar Test".to_string(),
        "2026-06-01T10:00:00Z".parse().unwrap(),
        "2026-06-01T12:00:00Z".parse().unwrap(),
        10,
    )
    .unwrap()
}
