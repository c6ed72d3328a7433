//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They store
//! data in memory and allow tests to verify behavior.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Webinar, WebinarId};
use crate::domain::ports::{DateGenerator, IdGenerator, WebinarRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Webinar Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
    fail: bool,
}

impl InMemoryWebinarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails with a database error
    pub fn failing() -> Self {
        Self {
            webinars: Arc::default(),
            fail: true,
        }
    }

    /// Pre-populate with a webinar for testing
    pub fn with_webinar(self, webinar: Webinar) -> Self {
        {
            let mut webinars = self.webinars.write().unwrap();
            webinars.insert(webinar.id().clone(), webinar);
        }
        self
    }

    /// Number of stored webinars
    pub fn len(&self) -> usize {
        self.webinars.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), DomainError> {
        self.check_fail()?;
        let mut webinars = self.webinars.write().unwrap();
        if webinars.contains_key(webinar.id()) {
            return Err(DomainError::AlreadyExists(webinar.id().to_string()));
        }
        webinars.insert(webinar.id().clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, DomainError> {
        self.check_fail()?;
        let webinars = self.webinars.read().unwrap();
        Ok(webinars.get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), DomainError> {
        self.check_fail()?;
        let mut webinars = self.webinars.write().unwrap();
        if !webinars.contains_key(webinar.id()) {
            return Err(DomainError::NotFound(webinar.id().to_string()));
        }
        webinars.insert(webinar.id().clone(), webinar.clone());
        Ok(())
    }
}

// ============================================================================
// Fixed Generators
// ============================================================================

/// Deterministic id generator: "id-1", "id-2", ...
#[derive(Default)]
pub struct FixedIdGenerator {
    counter: AtomicUsize,
}

impl FixedIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{}", n)
    }
}

/// Clock frozen at a configured instant
pub struct FixedDateGenerator {
    now: DateTime<Utc>,
}

impl FixedDateGenerator {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl DateGenerator for FixedDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
