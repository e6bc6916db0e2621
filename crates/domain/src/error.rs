//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations, so callers get
//! consistent error handling without resorting to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for record invariant violations.
    ///
    /// Use this when the character record breaks an invariant:
    /// - Required fields are empty or missing
    /// - Level or proficiency bonus is out of range
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown ability: luck");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: unknown ability: luck");
    }
}
