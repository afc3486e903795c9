use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::ApiError;
use crate::state::AppState;

pub const ORIGIN_REJECTED: &str = "Origin not allowed.";

/// Origin allow-list guard.
///
/// A request carrying an `Origin` header that is not on the allow-list is
/// answered with 403 here and never reaches routing. Requests without an
/// `Origin` header (same-origin, curl, server-to-server) pass through.
pub async fn require_allowed_origin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(origin) = req.headers().get(ORIGIN)
        && !state.is_allowed_origin(origin)
    {
        tracing::warn!(
            origin = %String::from_utf8_lossy(origin.as_bytes()),
            path = %req.uri().path(),
            "rejected request from disallowed origin"
        );
        return Err(ApiError::Forbidden(ORIGIN_REJECTED.to_string()));
    }

    Ok(next.run(req).await)
}

/// CORS response headers for allowed origins, including preflight answers.
pub fn cors_layer(state: &AppState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.allowed_origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
