use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{NewSubmission, RawSubmission, SubmissionList};
use super::repository::SubmissionStore;
use super::validation;
use crate::errors::ServiceError;

/// Accepts validated contact submissions and reads them back.
///
/// Stateless apart from the injected store; safe to share behind an `Arc`.
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self { Self { store } }

    /// Validate a raw payload and store it. Nothing reaches the store when
    /// validation fails.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::contact::{domain::RawSubmission, repository::mock::InMemorySubmissionStore, service::SubmissionService};
    /// use service::errors::ServiceError;
    /// let svc = SubmissionService::new(Arc::new(InMemorySubmissionStore::default()));
    /// let raw: RawSubmission = serde_json::from_value(serde_json::json!({"name": "J"})).unwrap();
    /// let err = tokio_test::block_on(svc.submit(&raw)).unwrap_err();
    /// assert!(matches!(err, ServiceError::Validation(ref e) if e.has_field("name")));
    /// ```
    pub async fn submit(&self, raw: &RawSubmission) -> Result<Uuid, ServiceError> {
        let record = validation::validate(raw).inspect_err(|e| {
            warn!(error_count = e.errors().len(), "contact_submission_rejected");
        })?;
        self.create(record).await
    }

    /// Store an already validated record and return its id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::contact_submission::Category;
    /// use service::contact::{domain::NewSubmission, repository::mock::InMemorySubmissionStore, service::SubmissionService};
    /// let svc = SubmissionService::new(Arc::new(InMemorySubmissionStore::default()));
    /// let record = NewSubmission {
    ///     name: "Jo".into(), last_name: "Do".into(), email: "jo@x.com".into(),
    ///     department: None, category: Category::Feedback, message: "1234567890".into(),
    /// };
    /// let id = tokio_test::block_on(svc.create(record)).unwrap();
    /// let list = tokio_test::block_on(svc.list()).unwrap();
    /// assert_eq!(list.count, 1);
    /// assert_eq!(list.submissions[0].id, id);
    /// ```
    #[instrument(skip(self, record), fields(category = %record.category))]
    pub async fn create(&self, record: NewSubmission) -> Result<Uuid, ServiceError> {
        let created = self.store.insert(&record).await?;
        info!(submission_id = %created.id, "contact_submission_created");
        Ok(created.id)
    }

    /// All submissions, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<SubmissionList, ServiceError> {
        let rows = self.store.list_newest_first().await?;
        Ok(SubmissionList::from(rows))
    }
}
