use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use feedback_core::models::feedback::{Feedback, NewFeedback};

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

pub const FEEDBACK_SAVED: &str = "Feedback saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save feedback.";
pub const FETCH_FAILED: &str = "Failed to fetch feedbacks.";

/// Confirmation body returned on a successful create.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Feedback saved successfully!")]
    pub message: String,
}

/// Create a feedback record.
///
/// Every failure, whether an unparseable body, a broken field rule or a
/// store error, gets the same 400. The cause only goes to the log.
#[utoipa::path(
    post,
    path = "/api/feedbacks",
    tag = "Feedback",
    summary = "Create a new feedback",
    description = "Validates the submission and stores it.",
    request_body = NewFeedback,
    responses(
        (status = 201, description = "Feedback saved", body = MessageBody),
        (status = 400, description = "Failed to save feedback", body = ErrorBody),
    )
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<NewFeedback>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(new) = payload.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "rejected feedback body");
        save_failed()
    })?;

    let feedback = Feedback::create(new).map_err(|e| {
        tracing::warn!(error = %e, "feedback failed validation");
        save_failed()
    })?;

    state.store.insert(&feedback).await.map_err(|e| {
        tracing::error!(id = %feedback.id, error = %e, "failed to store feedback");
        save_failed()
    })?;

    tracing::info!(id = %feedback.id, rating = feedback.rating, "feedback saved");
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: FEEDBACK_SAVED.to_string(),
        }),
    ))
}

/// List every stored feedback record, unpaginated.
#[utoipa::path(
    get,
    path = "/api/feedbacks",
    tag = "Feedback",
    summary = "List all feedbacks",
    description = "Returns an array with every stored feedback.",
    responses(
        (status = 200, description = "All stored feedbacks", body = [Feedback]),
        (status = 500, description = "Failed to fetch feedbacks", body = ErrorBody),
    )
)]
pub async fn list_feedbacks(State(state): State<AppState>) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedbacks = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list feedbacks");
        ApiError::Internal(FETCH_FAILED.to_string())
    })?;

    Ok(Json(feedbacks))
}

fn save_failed() -> ApiError {
    ApiError::BadRequest(SAVE_FAILED.to_string())
}
