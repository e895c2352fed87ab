//! Party identification (N1).

use remit_model::{PayeeInfo, PayerInfo};
use remit_x12::Segment;

use crate::codes::{ENTITY_PAYEE, ENTITY_PAYER, ID_NPI, ID_PAYER};
use crate::error::Result;

use super::common::require;

/// N1*PR*{payer name}*XV*{payer id}
pub(crate) fn emit_payer_name(payer: &PayerInfo) -> Result<Segment> {
    let name = require("payerInfo.name", &payer.name)?;
    let id = require("payerInfo.id", &payer.id)?;
    Ok(Segment::with_elements("N1", [ENTITY_PAYER, name, ID_PAYER, id]))
}

/// N1*PE*{payee name}*XX*{NPI}. The NPI is not format-checked.
pub(crate) fn emit_payee_name(payee: &PayeeInfo) -> Result<Segment> {
    let name = require("payeeInfo.name", &payee.name)?;
    let npi = require("payeeInfo.npi", &payee.npi)?;
    Ok(Segment::with_elements("N1", [ENTITY_PAYEE, name, ID_NPI, npi]))
}
