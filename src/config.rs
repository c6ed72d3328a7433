use std::env;

/// Minimum lead time between "now" and a webinar's start, in days
pub const DEFAULT_MIN_LEAD_DAYS: i64 = 3;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Scheduling rule: a webinar must start at least this many days out
    pub min_lead_days: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            min_lead_days: env::var("WEBINAR_MIN_LEAD_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_LEAD_DAYS),
        }
    }
}
