//! Webinar handlers
//!
//! Endpoints for organizing webinars and changing seat counts. The caller's
//! identity comes from the `x-user-id` header; authenticating that identity
//! is out of scope for this service.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::{ChangeSeatsCommand, OrganizeWebinarsCommand};
use crate::domain::entities::{UserId, WebinarId};
use crate::error::AppError;
use crate::AppState;

const USER_ID_HEADER: &str = "x-user-id";

/// Extract the requester identity from the `x-user-id` header
fn requester_id(headers: &HeaderMap) -> Result<UserId, AppError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(UserId::from)
        .ok_or_else(|| AppError::Unauthorized(format!("missing {} header", USER_ID_HEADER)))
}

/// Request to organize a new webinar
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarRequest {
    pub title: String,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Response for a newly organized webinar
#[derive(Debug, Serialize)]
pub struct OrganizeWebinarResponse {
    pub id: String,
}

/// POST /webinars
///
/// Organize a new webinar. 201 with the generated id on success.
pub async fn organize_webinar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<OrganizeWebinarRequest>,
) -> Result<(StatusCode, Json<OrganizeWebinarResponse>), AppError> {
    let organizer_id = requester_id(&headers)?;

    let id = state
        .organize_webinars
        .execute(OrganizeWebinarsCommand {
            organizer_id,
            title: request.title,
            start_date: request.start_date,
            end_date: request.end_date,
            seats: request.seats,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrganizeWebinarResponse { id: id.to_string() }),
    ))
}

/// Seat count as it appears on the wire: clients send numbers or numeric
/// strings interchangeably
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeatsValue {
    Number(i32),
    Text(String),
}

impl SeatsValue {
    fn parse(&self) -> Result<i32, AppError> {
        match self {
            SeatsValue::Number(n) => Ok(*n),
            SeatsValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::BadRequest(format!("invalid seat count: {:?}", s))),
        }
    }
}

/// Request to change a webinar's seat count
#[derive(Debug, Deserialize)]
pub struct ChangeSeatsRequest {
    pub seats: SeatsValue,
}

/// Response for a successful seat change
#[derive(Debug, Serialize)]
pub struct ChangeSeatsResponse {
    pub message: String,
}

/// POST /webinars/:id/seats
///
/// Change the seat count of a webinar. Only the organizer may do this.
pub async fn change_seats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<ChangeSeatsRequest>,
) -> Result<Json<ChangeSeatsResponse>, AppError> {
    let organizer_id = requester_id(&headers)?;
    let seats = request.seats.parse()?;

    state
        .change_seats
        .execute(ChangeSeatsCommand {
            webinar_id: WebinarId::from(id),
            organizer_id,
            seats,
        })
        .await?;

    Ok(Json(ChangeSeatsResponse {
        message: "Seats updated".to_string(),
    }))
}
