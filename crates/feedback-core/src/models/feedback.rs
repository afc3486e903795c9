use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationErrors;
use crate::validate;

/// A persisted feedback submission.
///
/// Only ever built through [`Feedback::create`] (or read back from the store),
/// so every instance satisfies the field rules in [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Feedback {
    /// Assigned on creation. Time ordered, so key order is creation order.
    #[schema(example = "0192f6a8-3c1e-7b4a-9d2f-5e6a7b8c9d0e")]
    pub id: Uuid,
    /// Name of the person who sent the feedback.
    #[schema(example = "João Silva", min_length = 3)]
    pub name: String,
    #[schema(example = "joao@email.com")]
    pub email: String,
    /// Score from 1 to 5.
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
    /// Comment about the experience.
    #[schema(example = "Ótimo atendimento!", min_length = 10)]
    pub message: String,
    #[schema(value_type = String, format = DateTime, example = "2025-02-20T12:34:56.789Z")]
    pub created_at: jiff::Timestamp,
    #[schema(value_type = String, format = DateTime, example = "2025-02-20T12:34:56.789Z")]
    pub updated_at: jiff::Timestamp,
}

/// Body of a create request: exactly the client-settable fields.
///
/// Unknown fields are ignored; a missing or mistyped field fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NewFeedback {
    #[schema(example = "João Silva")]
    pub name: String,
    #[schema(example = "joao@email.com")]
    pub email: String,
    #[schema(example = 5)]
    pub rating: i32,
    #[schema(example = "Ótimo atendimento!")]
    pub message: String,
}

impl NewFeedback {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate::feedback_fields(&self.name, &self.email, self.rating, &self.message)
    }
}

impl Feedback {
    /// Validate a submission and stamp it with a fresh id and the current time.
    pub fn create(new: NewFeedback) -> Result<Self, ValidationErrors> {
        Self::create_at(new, Uuid::now_v7(), jiff::Timestamp::now())
    }

    pub fn create_at(
        new: NewFeedback,
        id: Uuid,
        now: jiff::Timestamp,
    ) -> Result<Self, ValidationErrors> {
        new.validate()?;
        let NewFeedback {
            name,
            email,
            rating,
            message,
        } = new;

        Ok(Self {
            id,
            name,
            email,
            rating,
            message,
            created_at: now,
            updated_at: now,
        })
    }

    /// Re-check a record that came from outside this process (e.g. a stored document).
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate::feedback_fields(&self.name, &self.email, self.rating, &self.message)
    }
}
