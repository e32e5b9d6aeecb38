use std::{any::Any, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{error, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::contact::SubmissionService;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod contact;

/// Request bodies larger than this are refused with 413.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Shared handler state; the store client inside is created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<SubmissionService>,
}

impl AppState {
    pub fn new(submissions: Arc<SubmissionService>) -> Self { Self { submissions } }
}

#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthDoc)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "handler panicked");
    ApiError::Internal.into_response()
}

// A known path with the wrong method is answered like an unknown path.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/contact", post(contact::create).fallback(not_found))
        .route("/submissions", get(contact::list).fallback(not_found))
}

/// Build the full application router. Every endpoint is reachable both at the
/// root and under `/api`.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
