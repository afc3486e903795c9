use async_trait::async_trait;
use tokio::sync::RwLock;

use feedback_core::models::feedback::Feedback;

use crate::error::StorageError;
use crate::store::FeedbackStore;

/// In-process store for local runs and tests. Lists in insertion order.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    feedbacks: RwLock<Vec<Feedback>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.feedbacks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.feedbacks.read().await.is_empty()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn insert(&self, feedback: &Feedback) -> Result<(), StorageError> {
        self.feedbacks.write().await.push(feedback.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Feedback>, StorageError> {
        Ok(self.feedbacks.read().await.clone())
    }
}
