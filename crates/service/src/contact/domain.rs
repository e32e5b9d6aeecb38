use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use models::contact_submission::{Category, Model};

/// Contact form payload exactly as the client sent it.
///
/// Every field is kept as a loose JSON value so the validator, not the
/// deserializer, decides what is acceptable. Unknown fields are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub department: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl RawSubmission {
    /// Look a field up by its wire name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match field {
            "name" => self.name.as_ref(),
            "lastName" => self.last_name.as_ref(),
            "email" => self.email.as_ref(),
            "department" => self.department.as_ref(),
            "category" => self.category.as_ref(),
            "message" => self.message.as_ref(),
            _ => None,
        }
    }
}

/// Trimmed, normalized submission ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub category: Category,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Every rule violation found in one payload, in rule order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field error(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self(errors)) }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().filter(move |e| e.field == field).map(|e| e.message.as_str())
    }
}

/// Result of listing all submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionList {
    pub count: usize,
    pub submissions: Vec<Model>,
}

impl From<Vec<Model>> for SubmissionList {
    fn from(submissions: Vec<Model>) -> Self {
        Self { count: submissions.len(), submissions }
    }
}
