use std::fmt;

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub category: Category,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Kind of feedback a visitor is sending.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[sea_orm(string_value = "feedback")]
    Feedback,
    #[sea_orm(string_value = "suggestion")]
    Suggestion,
    #[sea_orm(string_value = "problem")]
    Problem,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Feedback, Category::Suggestion, Category::Problem];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Feedback => "feedback",
            Category::Suggestion => "suggestion",
            Category::Problem => "problem",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = errors::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| errors::ModelError::Validation(format!("unknown category `{s}`")))
    }
}

/// Insert one submission. `id` and `created_at` come back from the database.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    last_name: &str,
    email: &str,
    department: Option<&str>,
    category: Category,
    message: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
        department: Set(department.map(str::to_string)),
        category: Set(category),
        message: Set(message.to_string()),
        created_at: NotSet,
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All submissions, newest first. Id breaks ties so repeated reads agree.
pub async fn list_newest_first(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
