//! feedback-storage
//!
//! The feedback document store. An S3 backend for deployments and an
//! in-memory backend for local runs and tests, behind [`FeedbackStore`].

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod store;

pub use memory::MemoryFeedbackStore;
pub use store::{FeedbackStore, S3FeedbackStore};
