//! Object key conventions.
//!
//! Pure string functions. These define the canonical layout of feedback
//! documents in the store bucket.

use uuid::Uuid;

pub const FEEDBACKS_PREFIX: &str = "feedbacks/";

pub fn feedback(id: Uuid) -> String {
    format!("{FEEDBACKS_PREFIX}{id}.json")
}

/// Whether `key` names a feedback document (as opposed to a folder marker
/// or some unrelated object sharing the prefix).
pub fn is_feedback_document(key: &str) -> bool {
    key.strip_prefix(FEEDBACKS_PREFIX)
        .and_then(|rest| rest.strip_suffix(".json"))
        .is_some_and(|id| Uuid::parse_str(id).is_ok())
}
