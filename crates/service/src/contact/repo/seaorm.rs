use sea_orm::DatabaseConnection;

use models::contact_submission::{self, Model};

use crate::contact::domain::NewSubmission;
use crate::contact::repository::SubmissionStore;
use crate::errors::ServiceError;

/// PostgreSQL-backed store. The connection pool is owned by the caller.
#[derive(Clone)]
pub struct SeaOrmSubmissionStore {
    pub db: DatabaseConnection,
}

impl SeaOrmSubmissionStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl SubmissionStore for SeaOrmSubmissionStore {
    async fn insert(&self, record: &NewSubmission) -> Result<Model, ServiceError> {
        let created = contact_submission::create(
            &self.db,
            &record.name,
            &record.last_name,
            &record.email,
            record.department.as_deref(),
            record.category,
            &record.message,
        )
        .await?;
        Ok(created)
    }

    async fn list_newest_first(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(contact_submission::list_newest_first(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::contact_submission::Category;
    use uuid::Uuid;

    #[tokio::test]
    async fn insert_then_list_through_store() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let store = SeaOrmSubmissionStore::new(db);

        let record = NewSubmission {
            name: "Jo".into(),
            last_name: "Do".into(),
            email: format!("jo_{}@example.com", Uuid::new_v4().simple()),
            department: None,
            category: Category::Suggestion,
            message: "store round trip".into(),
        };
        let created = store.insert(&record).await?;
        assert_eq!(created.email, record.email);
        assert_eq!(created.department, None);

        let listed = store.list_newest_first().await?;
        assert!(listed.iter().any(|m| m.id == created.id));
        Ok(())
    }
}
