use std::fmt;

use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort { min: usize, actual: usize },
    InvalidFormat,
    OutOfRange { min: i32, max: i32, actual: i32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { min, actual } => {
                write!(f, "must be at least {min} characters (got {actual})")
            }
            Violation::InvalidFormat => f.write_str("has an invalid format"),
            Violation::OutOfRange { min, max, actual } => {
                write!(f, "must be between {min} and {max} (got {actual})")
            }
        }
    }
}

/// A rule that a candidate record broke, and the field it broke it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {violation}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

/// Every rule a candidate record broke. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid feedback: {}", join(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Whether `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
