//! Financial information (BPR).

use remit_model::PaymentAdvice;
use remit_x12::Segment;

use crate::amount::{format_amount, total_paid};
use crate::codes::{CREDIT, HANDLING_INFORMATION_ONLY, PAYMENT_METHOD_ACH};
use crate::error::Result;

use super::common::require;

/// Build BPR. The total is always recomputed from the claims; the declared
/// check amount is never trusted.
///
/// | Element | Value |
/// |---------|-------|
/// | BPR01 | `I` |
/// | BPR02 | Sum of claim paid amounts, two decimals |
/// | BPR03 | `C` |
/// | BPR04 | `ACH` |
/// | BPR05-09 | blank |
/// | BPR10 | Payer identifier |
/// | BPR11-15 | blank |
/// | BPR16 | Check date |
pub(crate) fn emit_bpr(advice: &PaymentAdvice) -> Result<Segment> {
    let total = total_paid(&advice.claims)?;
    let payer_id = require("payerInfo.id", &advice.payer_info.id)?;
    let check_date = require("checkInfo.checkDate", &advice.check_info.check_date)?;

    Ok(Segment::new("BPR")
        .with_element(HANDLING_INFORMATION_ONLY)
        .with_element(format_amount(total))
        .with_element(CREDIT)
        .with_element(PAYMENT_METHOD_ACH)
        .with_empty(5)
        .with_element(payer_id)
        .with_empty(5)
        .with_element(check_date))
}
