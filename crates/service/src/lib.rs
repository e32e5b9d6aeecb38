//! Service layer for the contact form backend.
//! - Validation of raw payloads into normalized records.
//! - A persistence port (`SubmissionStore`) with SeaORM and in-memory adapters.
//! - `SubmissionService`, the only thing the HTTP layer talks to.

pub mod errors;
pub mod contact;
#[cfg(test)]
pub mod test_support;
