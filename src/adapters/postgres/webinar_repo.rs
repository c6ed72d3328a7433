//! PostgreSQL adapter for WebinarRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};

use crate::domain::entities::{UserId, Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::entity::webinars;
use crate::error::DomainError;

/// PostgreSQL implementation of WebinarRepository
pub struct PostgresWebinarRepository {
    db: DatabaseConnection,
}

impl PostgresWebinarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), DomainError> {
        let model = webinars::ActiveModel {
            id: Set(webinar.id().to_string()),
            organizer_id: Set(webinar.organizer_id().to_string()),
            title: Set(webinar.title().to_string()),
            start_date: Set(webinar.start_date().fixed_offset()),
            end_date: Set(webinar.end_date().fixed_offset()),
            seats: Set(webinar.seats()),
        };

        model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::AlreadyExists(webinar.id().to_string())
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, DomainError> {
        let result = webinars::Entity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), DomainError> {
        // No optimistic-concurrency token: concurrent updates to the same
        // webinar are last-write-wins at the storage layer.
        let model = webinars::ActiveModel {
            id: Set(webinar.id().to_string()),
            organizer_id: Set(webinar.organizer_id().to_string()),
            title: Set(webinar.title().to_string()),
            start_date: Set(webinar.start_date().fixed_offset()),
            end_date: Set(webinar.end_date().fixed_offset()),
            seats: Set(webinar.seats()),
        };

        model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(webinar.id().to_string()),
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<webinars::Model> for Webinar {
    fn from(model: webinars::Model) -> Self {
        Webinar::hydrate(
            WebinarId(model.id),
            UserId(model.organizer_id),
            model.title,
            model.start_date.with_timezone(&Utc),
            model.end_date.with_timezone(&Utc),
            model.seats,
        )
    }
}
