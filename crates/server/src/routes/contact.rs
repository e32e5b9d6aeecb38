use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use uuid::Uuid;

use models::contact_submission::Model;

use crate::{errors::ApiError, extract::ContactPayload, routes::AppState};

pub const RECEIVED_MESSAGE: &str = "Your message has been received. We will get back to you soon!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreated {
    pub success: bool,
    pub message: &'static str,
    pub submission_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsOutput {
    pub success: bool,
    pub count: usize,
    pub submissions: Vec<Model>,
}

#[utoipa::path(
    post, path = "/api/contact", tag = "contact",
    request_body = crate::openapi::ContactRequestDoc,
    responses(
        (status = 201, description = "Stored", body = crate::openapi::ContactCreatedDoc),
        (status = 400, description = "Validation Failed", body = crate::openapi::ValidationFailedDoc),
        (status = 500, description = "Store Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ContactPayload(raw): ContactPayload,
) -> Result<(StatusCode, Json<ContactCreated>), ApiError> {
    let id = state.submissions.submit(&raw).await.map_err(ApiError::from_submit)?;
    Ok((
        StatusCode::CREATED,
        Json(ContactCreated { success: true, message: RECEIVED_MESSAGE, submission_id: id }),
    ))
}

#[utoipa::path(
    get, path = "/api/submissions", tag = "contact",
    responses(
        (status = 200, description = "List OK", body = crate::openapi::SubmissionsDoc),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<SubmissionsOutput>, ApiError> {
    let list = state.submissions.list().await.map_err(ApiError::from_list)?;
    Ok(Json(SubmissionsOutput { success: true, count: list.count, submissions: list.submissions }))
}
