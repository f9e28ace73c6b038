//! Error types for fee calculation
//!
//! Error taxonomy using thiserror. Fallback behaviours (unrecognized
//! property type, missing lease duration) are not errors and never
//! appear here.

use thiserror::Error;

/// Fee calculation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid exemption {id}: discount fraction {fraction} outside [0, 1]")]
    InvalidExemption { id: String, fraction: String },

    #[error("Unknown exemption: {0}")]
    UnknownExemption(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),

    #[error("Invalid reference number: {0}")]
    InvalidReference(String),

    #[error("Arithmetic overflow while computing {0}")]
    ArithmeticOverflow(String),
}

impl FeeError {
    /// Shorthand for an `InvalidInput` on a named field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FeeError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by caller-supplied data
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, FeeError::ArithmeticOverflow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = FeeError::invalid_input("property_value", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input: property_value must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_exemption_display() {
        let err = FeeError::InvalidExemption {
            id: "bogus".to_string(),
            fraction: "1.5".to_string(),
        };
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_overflow_is_not_caller_error() {
        assert!(!FeeError::ArithmeticOverflow("gross stamp duty".into()).is_caller_error());
        assert!(FeeError::UnknownExemption("x".into()).is_caller_error());
    }
}
