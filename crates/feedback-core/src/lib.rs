//! feedback-core
//!
//! Pure domain types, validation rules, and store key conventions.
//! No storage or HTTP dependency. This is the shared vocabulary of the feedback service.

pub mod error;
pub mod models;
pub mod store_keys;
pub mod validate;
