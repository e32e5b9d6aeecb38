//! Contact form submissions: validation, persistence port and service.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{FieldError, NewSubmission, RawSubmission, SubmissionList, ValidationErrors};
pub use repository::SubmissionStore;
pub use service::SubmissionService;
