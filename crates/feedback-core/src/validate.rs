//! Field rules for feedback records.
//!
//! A record is valid only when every rule holds at once. Checks collect all
//! violations instead of stopping at the first one.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FieldViolation, ValidationErrors, Violation};

pub const NAME_MIN_LEN: usize = 3;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Unanchored `local@domain.tld` shape.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+\..+").expect("email pattern compiles"));

pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const RATING: &str = "rating";
    pub const MESSAGE: &str = "message";
}

/// Accumulates violations across the fields of one record.
#[derive(Debug, Default)]
pub struct Checks {
    violations: Vec<FieldViolation>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length is counted in UTF-16 code units, matching `String.length` in the
    /// browser that submits the form.
    pub fn min_len(mut self, field: &'static str, value: &str, min: usize) -> Self {
        let actual = value.encode_utf16().count();
        if actual < min {
            self.violations.push(FieldViolation {
                field,
                violation: Violation::TooShort { min, actual },
            });
        }
        self
    }

    pub fn email(mut self, field: &'static str, value: &str) -> Self {
        if !is_email(value) {
            self.violations.push(FieldViolation {
                field,
                violation: Violation::InvalidFormat,
            });
        }
        self
    }

    pub fn range(mut self, field: &'static str, value: i32, min: i32, max: i32) -> Self {
        if !(min..=max).contains(&value) {
            self.violations.push(FieldViolation {
                field,
                violation: Violation::OutOfRange {
                    min,
                    max,
                    actual: value,
                },
            });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Run every feedback rule against the four client-supplied fields.
pub fn feedback_fields(
    name: &str,
    email: &str,
    rating: i32,
    message: &str,
) -> Result<(), ValidationErrors> {
    Checks::new()
        .min_len(field::NAME, name, NAME_MIN_LEN)
        .email(field::EMAIL, email)
        .range(field::RATING, rating, RATING_MIN, RATING_MAX)
        .min_len(field::MESSAGE, message, MESSAGE_MIN_LEN)
        .finish()
}
