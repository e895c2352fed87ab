//! Monetary amounts.
//!
//! Amounts travel as text and are emitted verbatim; they are parsed only to
//! validate them and to compute the payment total in fixed-point decimal.

use std::str::FromStr;

use remit_model::Claim;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{GenerateError, Result};

/// Parse a required non-negative amount.
///
/// Only plain decimal text (`450`, `450.00`, `0.5`) is accepted. Signs,
/// exponents and digit separators are rejected since the text is emitted as
/// given.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GenerateError::missing_field(field));
    }
    if !is_plain_decimal(trimmed) {
        return Err(GenerateError::invalid_amount(field, value));
    }
    Decimal::from_str(trimmed).map_err(|_| GenerateError::invalid_amount(field, value))
}

/// ASCII digits, optionally followed by `.` and more digits.
fn is_plain_decimal(text: &str) -> bool {
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => digits(whole) && digits(fraction),
        None => digits(text),
    }
}

/// Parse an amount that may be blank.
pub fn parse_optional_amount(field: &str, value: &str) -> Result<Option<Decimal>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(field, value).map(Some)
}

/// Sum of every claim's paid amount.
pub fn total_paid(claims: &[Claim]) -> Result<Decimal> {
    claims
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |total, (index, claim)| {
            let field = format!("claims[{index}].paidAmount");
            let paid = parse_amount(&field, &claim.paid_amount)?;
            total
                .checked_add(paid)
                .ok_or_else(|| GenerateError::invalid_amount(field, &claim.paid_amount))
        })
}

/// Render an amount with exactly two decimals.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
