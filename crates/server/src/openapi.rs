use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String, pub message: String, pub timestamp: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ContactRequestDoc {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    /// One of `feedback`, `suggestion`, `problem`
    pub category: String,
    pub message: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ContactCreatedDoc { pub success: bool, pub message: String, pub submission_id: Uuid }

#[derive(ToSchema)]
pub struct FieldErrorDoc { pub field: String, pub message: String }

#[derive(ToSchema)]
pub struct ValidationFailedDoc { pub error: String, pub details: Vec<FieldErrorDoc> }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct SubmissionDoc {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub category: String,
    pub message: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct SubmissionsDoc { pub success: bool, pub count: usize, pub submissions: Vec<SubmissionDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contact::create,
        crate::routes::contact::list,
    ),
    components(
        schemas(
            HealthDoc,
            ContactRequestDoc,
            ContactCreatedDoc,
            FieldErrorDoc,
            ValidationFailedDoc,
            ErrorDoc,
            SubmissionDoc,
            SubmissionsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contact")
    )
)]
pub struct ApiDoc;
