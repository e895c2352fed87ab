//! Shared helpers for segment emitters.

use crate::amount::parse_amount;
use crate::error::{GenerateError, Result};

/// Return the trimmed value, or `MissingField` when it is blank.
pub(crate) fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GenerateError::missing_field(field));
    }
    Ok(trimmed)
}

/// Return the trimmed value; blank is allowed.
pub(crate) fn optional(value: &str) -> &str {
    value.trim()
}

/// Validate a required amount and return its text unchanged (trimmed).
pub(crate) fn require_amount<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    parse_amount(field, value)?;
    Ok(value.trim())
}

/// Field path for a claim-level field, e.g. `claims[1].paidAmount`.
pub(crate) fn claim_field(claim_index: usize, field: &str) -> String {
    format!("claims[{claim_index}].{field}")
}

/// Field path for a service line field, e.g. `claims[0].serviceLines[2].units`.
pub(crate) fn line_field(claim_index: usize, line_index: usize, field: &str) -> String {
    format!("claims[{claim_index}].serviceLines[{line_index}].{field}")
}
