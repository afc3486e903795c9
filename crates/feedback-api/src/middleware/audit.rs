use std::time::Instant;

use axum::extract::Request;
use axum::http::header::ORIGIN;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

/// Coarse result of a request, logged next to the exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    /// 403 from the origin guard.
    OriginRejected,
    /// Any other 4xx, including every failed feedback submission.
    Rejected,
    Failed,
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::FORBIDDEN {
            Outcome::OriginRejected
        } else if status.is_client_error() {
            Outcome::Rejected
        } else if status.is_server_error() {
            Outcome::Failed
        } else {
            Outcome::Ok
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::OriginRejected => "origin_rejected",
            Outcome::Rejected => "rejected",
            Outcome::Failed => "failed",
        }
    }
}

/// Request logging middleware.
///
/// One structured `api_request` event per request, with the calling origin
/// (`-` when absent) and the time spent below this layer. Server failures are
/// logged at `warn` so they stand out from routine traffic.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let origin = req
        .headers()
        .get(ORIGIN)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;

    let status = response.status();
    let outcome = Outcome::from_status(status);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if outcome == Outcome::Failed {
        tracing::warn!(
            method = %method,
            path = %path,
            origin = %origin,
            status = status.as_u16(),
            outcome = outcome.as_str(),
            elapsed_ms,
            "api_request"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            origin = %origin,
            status = status.as_u16(),
            outcome = outcome.as_str(),
            elapsed_ms,
            "api_request"
        );
    }

    response
}
