use async_trait::async_trait;
use aws_sdk_s3::Client;

use feedback_core::models::feedback::Feedback;
use feedback_core::store_keys;

use crate::error::StorageError;
use crate::objects;

/// A collection of feedback documents.
///
/// Records are append-only: there is no update or delete. Concurrency control
/// is left entirely to the backend, so a `list` racing an `insert` may or may
/// not observe it.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist one already-validated record.
    async fn insert(&self, feedback: &Feedback) -> Result<(), StorageError>;

    /// Every stored record, in the backend's natural order.
    async fn list(&self) -> Result<Vec<Feedback>, StorageError>;
}

/// One JSON document per record at `feedbacks/{id}.json`.
///
/// Ids are UUID v7, so S3's lexicographic listing is creation order.
#[derive(Clone)]
pub struct S3FeedbackStore {
    client: Client,
    bucket: String,
}

impl S3FeedbackStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl FeedbackStore for S3FeedbackStore {
    async fn insert(&self, feedback: &Feedback) -> Result<(), StorageError> {
        let key = store_keys::feedback(feedback.id);
        let body = serde_json::to_vec(feedback)?;
        objects::put_object(&self.client, &self.bucket, &key, body, Some("application/json"))
            .await?;
        tracing::debug!(key = %key, "feedback document written");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Feedback>, StorageError> {
        let keys =
            objects::list_objects(&self.client, &self.bucket, store_keys::FEEDBACKS_PREFIX).await?;

        let mut feedbacks = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| store_keys::is_feedback_document(k)) {
            let body = objects::get_object(&self.client, &self.bucket, key).await?;
            feedbacks.push(decode_document(key, &body)?);
        }

        Ok(feedbacks)
    }
}

/// Parse a stored document and re-check it against the field rules.
pub fn decode_document(key: &str, body: &[u8]) -> Result<Feedback, StorageError> {
    let feedback: Feedback = serde_json::from_slice(body)?;
    feedback
        .validate()
        .map_err(|e| StorageError::CorruptDocument {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    Ok(feedback)
}
