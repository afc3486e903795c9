use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use tower::ServiceExt;

use feedback_api::config::LOCAL_FRONTEND_ORIGIN;
use feedback_api::middleware::audit::Outcome;
use feedback_api::state::AppState;
use feedback_storage::MemoryFeedbackStore;

#[test]
fn outcome_classifies_statuses() {
    assert_eq!(Outcome::from_status(StatusCode::OK), Outcome::Ok);
    assert_eq!(Outcome::from_status(StatusCode::CREATED), Outcome::Ok);
    assert_eq!(
        Outcome::from_status(StatusCode::FORBIDDEN),
        Outcome::OriginRejected
    );
    assert_eq!(
        Outcome::from_status(StatusCode::BAD_REQUEST),
        Outcome::Rejected
    );
    assert_eq!(
        Outcome::from_status(StatusCode::NOT_FOUND),
        Outcome::Rejected
    );
    assert_eq!(
        Outcome::from_status(StatusCode::INTERNAL_SERVER_ERROR),
        Outcome::Failed
    );
}

#[test]
fn outcome_labels() {
    assert_eq!(Outcome::Ok.as_str(), "ok");
    assert_eq!(Outcome::OriginRejected.as_str(), "origin_rejected");
    assert_eq!(Outcome::Rejected.as_str(), "rejected");
    assert_eq!(Outcome::Failed.as_str(), "failed");
}

#[tokio::test]
async fn logging_layer_leaves_responses_untouched() {
    let origins = vec![HeaderValue::from_static(LOCAL_FRONTEND_ORIGIN)];
    let app = feedback_api::router(AppState::new(Arc::new(MemoryFeedbackStore::new()), origins));

    let with_origin = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, LOCAL_FRONTEND_ORIGIN)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(with_origin).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let unknown_route = Request::builder()
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(unknown_route).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
