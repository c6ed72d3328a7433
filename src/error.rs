//! Unified error types for the webinars API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Webinar must be scheduled at least {min_lead_days} days in advance")]
    TooSoon { min_lead_days: i64 },

    #[error("Webinar not found: {0}")]
    NotFound(String),

    #[error("User is not the organizer of this webinar")]
    NotOrganizer,

    #[error("Webinar already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(e @ DomainError::TooSoon { .. }) => {
                (StatusCode::BAD_REQUEST, "Webinar too soon", Some(e.to_string()))
            }
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::NotOrganizer) => (
                StatusCode::UNAUTHORIZED,
                "Not the organizer",
                Some("only the organizer may update this webinar".to_string()),
            ),
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", Some(msg.clone()))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
