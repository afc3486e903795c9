use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use feedback_core::models::feedback::{Feedback, NewFeedback};

use crate::error::ErrorBody;
use crate::routes;
use crate::routes::feedbacks::MessageBody;
use crate::routes::health::HealthStatus;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// OpenAPI document for the feedback service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alpha Feedback API",
        version = "1.0.0",
        description = "API for managing user feedback"
    ),
    servers((url = "http://localhost:5000", description = "Development server")),
    paths(
        routes::feedbacks::create_feedback,
        routes::feedbacks::list_feedbacks,
        routes::health::health_check,
    ),
    components(schemas(Feedback, NewFeedback, MessageBody, ErrorBody, HealthStatus)),
    tags(
        (name = "Feedback", description = "User feedback submissions"),
        (name = "Health", description = "Service liveness"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at [`DOCS_PATH`], backed by the JSON document at [`OPENAPI_JSON_PATH`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
