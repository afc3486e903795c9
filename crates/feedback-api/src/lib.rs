//! feedback-api
//!
//! HTTP surface of the feedback service: routing, origin allow-list, request
//! logging and API docs. The binary in `main.rs` wires this to a store and a
//! listener.

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;

use state::AppState;

/// Build the full application router.
///
/// Layers run outermost first: request logging, then the origin guard, then
/// CORS headers. A disallowed origin is therefore logged but never routed.
pub fn router(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::origin::require_allowed_origin,
        ))
        .layer(middleware::origin::cors_layer(&state));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/feedbacks",
            get(routes::feedbacks::list_feedbacks).post(routes::feedbacks::create_feedback),
        )
        .merge(openapi::swagger_ui())
        .layer(layers)
        .with_state(state)
}
