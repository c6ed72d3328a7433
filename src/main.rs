//! Webinars API Server
//!
//! A small CRUD service for managing webinars: organize a webinar with a
//! title, seat capacity and time window, and change its seat count subject
//! to ownership and business-rule checks.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresWebinarRepository, SystemDateGenerator, UuidIdGenerator};
use app::{ChangeSeats, OrganizeWebinars};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub organize_webinars:
        Arc<OrganizeWebinars<PostgresWebinarRepository, UuidIdGenerator, SystemDateGenerator>>,
    pub change_seats: Arc<ChangeSeats<PostgresWebinarRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,webinars_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting webinars API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let webinar_repo = Arc::new(PostgresWebinarRepository::new(db));
    let id_generator = Arc::new(UuidIdGenerator);
    let date_generator = Arc::new(SystemDateGenerator);

    // Create use cases
    let organize_webinars = Arc::new(OrganizeWebinars::new(
        webinar_repo.clone(),
        id_generator,
        date_generator,
        config.min_lead_days,
    ));
    let change_seats = Arc::new(ChangeSeats::new(webinar_repo));

    let state = AppState {
        organize_webinars,
        change_seats,
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/webinars", post(handlers::organize_webinar))
        .route("/webinars/:id/seats", post(handlers::change_seats))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
