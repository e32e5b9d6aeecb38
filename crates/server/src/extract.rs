//! Body extraction for the contact endpoint.
//!
//! Accepts JSON or urlencoded forms. Any other body (no content type, an
//! unrecognized one, blank JSON, a JSON value that is not an object) is an
//! empty mapping, so the validator reports every required field.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form,
};
use serde_json::Value;

use service::contact::RawSubmission;

use crate::errors::ApiError;

pub struct ContactPayload(pub RawSubmission);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Unsupported,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(ct) = req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Unsupported;
    };
    let mime = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else {
        BodyKind::Unsupported
    }
}

fn rejection(status: StatusCode, detail: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::MalformedBody(detail)
    }
}

/// Parse a JSON body. Only an object carries fields; blank input and any
/// other JSON value yield an empty payload.
pub fn parse_json(bytes: &[u8]) -> Result<RawSubmission, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawSubmission::default());
    }
    match serde_json::from_slice::<Value>(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))? {
        obj @ Value::Object(_) => serde_json::from_value(obj).map_err(|e| ApiError::MalformedBody(e.to_string())),
        _ => Ok(RawSubmission::default()),
    }
}

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(raw) = Form::<RawSubmission>::from_request(req, state)
                    .await
                    .map_err(|e| rejection(e.status(), e.body_text()))?;
                return Ok(ContactPayload(raw));
            }
            BodyKind::Unsupported => return Ok(ContactPayload(RawSubmission::default())),
            BodyKind::Json => {}
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| rejection(e.status(), e.body_text()))?;
        parse_json(&bytes).map(ContactPayload)
    }
}
