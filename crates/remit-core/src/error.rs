//! Error types for 835 generation.

use remit_x12::X12Error;
use thiserror::Error;

/// Errors that abort generation. No partial output is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A required field is absent or blank.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// An amount does not parse as a non-negative decimal.
    #[error("invalid amount in {field}: '{value}'")]
    InvalidAmount { field: String, value: String },

    /// The advice has no claims, so no payment total exists.
    #[error("payment advice has no claims")]
    EmptyClaimSet,

    /// A claim has no service lines.
    #[error("claim {patient_control_number} has no service lines")]
    EmptyServiceLineSet { patient_control_number: String },

    /// Envelope or serialization failure.
    #[error(transparent)]
    X12(#[from] X12Error),
}

/// Result type alias for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

impl GenerateError {
    /// Create a MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidAmount error.
    pub fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenerateError::missing_field("payerInfo.name");
        assert_eq!(format!("{err}"), "missing required field: payerInfo.name");

        let err = GenerateError::invalid_amount("claims[0].paidAmount", "abc");
        assert_eq!(
            format!("{err}"),
            "invalid amount in claims[0].paidAmount: 'abc'"
        );

        let err = GenerateError::EmptyServiceLineSet {
            patient_control_number: "CLM1".to_string(),
        };
        assert_eq!(format!("{err}"), "claim CLM1 has no service lines");
    }

    #[test]
    fn test_x12_error_is_transparent() {
        let err: GenerateError = X12Error::invalid_delimiters("dup").into();
        assert_eq!(format!("{err}"), "invalid delimiters: dup");
    }
}
