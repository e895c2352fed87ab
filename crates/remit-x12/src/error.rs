//! Error types for X12 envelope and serialization operations.

use thiserror::Error;

/// Errors that can occur when building or writing an X12 interchange.
#[derive(Debug, Error)]
pub enum X12Error {
    /// Separator set cannot produce a parseable document.
    #[error("invalid delimiters: {message}")]
    InvalidDelimiters { message: String },

    /// A data value contains an active separator.
    #[error("{tag}{position:02} contains the active separator '{delimiter}'")]
    DelimiterCollision {
        tag: String,
        position: usize,
        delimiter: char,
    },

    /// Envelope levels opened or closed out of order.
    #[error("envelope state error: {message}")]
    EnvelopeState { message: String },

    /// Control number does not fit its field.
    #[error("control number {value} does not fit {field}")]
    ControlNumberOverflow { field: &'static str, value: u64 },

    /// Fixed-width field value exceeds its width.
    #[error("{field} value '{value}' exceeds {limit} characters")]
    FieldTooLong {
        field: &'static str,
        value: String,
        limit: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for X12 operations.
pub type Result<T> = std::result::Result<T, X12Error>;

impl X12Error {
    /// Create an InvalidDelimiters error.
    pub fn invalid_delimiters(message: impl Into<String>) -> Self {
        Self::InvalidDelimiters {
            message: message.into(),
        }
    }

    /// Create a DelimiterCollision error.
    pub fn delimiter_collision(tag: impl Into<String>, position: usize, delimiter: char) -> Self {
        Self::DelimiterCollision {
            tag: tag.into(),
            position,
            delimiter,
        }
    }

    /// Create an EnvelopeState error.
    pub fn envelope_state(message: impl Into<String>) -> Self {
        Self::EnvelopeState {
            message: message.into(),
        }
    }

    /// Create a FieldTooLong error.
    pub fn field_too_long(field: &'static str, value: impl Into<String>, limit: usize) -> Self {
        Self::FieldTooLong {
            field,
            value: value.into(),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = X12Error::delimiter_collision("N1", 2, '*');
        assert_eq!(format!("{err}"), "N102 contains the active separator '*'");

        let err = X12Error::ControlNumberOverflow {
            field: "ISA13",
            value: 1_000_000_000,
        };
        assert_eq!(
            format!("{err}"),
            "control number 1000000000 does not fit ISA13"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let err: X12Error = io_err.into();
        assert!(matches!(err, X12Error::Io(_)));
    }
}
