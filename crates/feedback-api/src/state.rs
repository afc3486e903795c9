use std::sync::Arc;

use axum::http::HeaderValue;

use feedback_storage::FeedbackStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
    pub allowed_origins: Arc<[HeaderValue]>,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedbackStore>, allowed_origins: Vec<HeaderValue>) -> Self {
        Self {
            store,
            allowed_origins: allowed_origins.into(),
        }
    }

    pub fn is_allowed_origin(&self, origin: &HeaderValue) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}
