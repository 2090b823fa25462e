//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure leaves the entity it was raised from unchanged: constructors
/// fail before building anything and setters validate before assigning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing, empty or blank.
    #[error("value for '{parameter}' cannot be null or empty")]
    ArgumentNull { parameter: String },

    /// A present value was rejected by a business predicate.
    #[error("illegal value '{value}' for '{property}'")]
    IllegalValue { value: String, property: String },

    /// A cross-entity rule failed (e.g. a lookup by identifier missed).
    #[error("business rule violated: {0}")]
    BusinessRule(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn argument_null(parameter: impl Into<String>) -> Self {
        Self::ArgumentNull {
            parameter: parameter.into(),
        }
    }

    pub fn illegal_value(value: impl ToString, property: impl Into<String>) -> Self {
        Self::IllegalValue {
            value: value.to_string(),
            property: property.into(),
        }
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Reject a required string argument that is empty or whitespace-only.
pub fn require_text(value: &str, parameter: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::argument_null(parameter));
    }
    Ok(())
}
