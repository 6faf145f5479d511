//! Parse errors for the string-backed enums in [`crate::models`]

use std::fmt;

/// Returned when a string does not name a known enum variant
/// (order status, payment method, analytics range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVariant {
    pub kind: &'static str,
    pub value: String,
}

impl InvalidVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for InvalidVariant {}
