use async_trait::async_trait;

use models::contact_submission::Model;

use super::domain::NewSubmission;
use crate::errors::ServiceError;

/// Persistence port for contact submissions. Insert-only.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a validated record; the store assigns `id` and `created_at`.
    async fn insert(&self, record: &NewSubmission) -> Result<Model, ServiceError>;
    /// Every stored record, newest first, ties broken by id descending.
    async fn list_newest_first(&self) -> Result<Vec<Model>, ServiceError>;
}

/// In-process stores for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[derive(Default)]
    pub struct InMemorySubmissionStore {
        rows: Mutex<Vec<Model>>,
    }

    impl InMemorySubmissionStore {
        pub fn len(&self) -> usize {
            self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl SubmissionStore for InMemorySubmissionStore {
        async fn insert(&self, record: &NewSubmission) -> Result<Model, ServiceError> {
            let mut rows = self.rows.lock().map_err(|_| ServiceError::storage("store lock poisoned"))?;
            // Keep created_at strictly increasing so ordering is observable in fast tests
            let mut created_at = Utc::now().fixed_offset();
            if let Some(last) = rows.last() {
                if created_at <= last.created_at {
                    created_at = last.created_at + Duration::microseconds(1);
                }
            }
            let model = Model {
                id: Uuid::new_v4(),
                name: record.name.clone(),
                last_name: record.last_name.clone(),
                email: record.email.clone(),
                department: record.department.clone(),
                category: record.category,
                message: record.message.clone(),
                created_at,
            };
            rows.push(model.clone());
            Ok(model)
        }

        async fn list_newest_first(&self) -> Result<Vec<Model>, ServiceError> {
            let rows = self.rows.lock().map_err(|_| ServiceError::storage("store lock poisoned"))?;
            let mut out = rows.clone();
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
            Ok(out)
        }
    }

    /// Store that rejects every call, for exercising failure paths.
    #[derive(Default)]
    pub struct UnavailableSubmissionStore;

    #[async_trait]
    impl SubmissionStore for UnavailableSubmissionStore {
        async fn insert(&self, _record: &NewSubmission) -> Result<Model, ServiceError> {
            Err(ServiceError::storage("connection refused"))
        }

        async fn list_newest_first(&self) -> Result<Vec<Model>, ServiceError> {
            Err(ServiceError::storage("connection refused"))
        }
    }
}
