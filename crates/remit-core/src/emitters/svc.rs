//! Service payment information (SVC).

use remit_model::ServiceLine;
use remit_x12::Segment;

use crate::error::Result;

use super::common::{line_field, optional, require, require_amount};

/// SVC*{qualifier}:{code}*{charge}*{paid}**{units}
///
/// SVC01 is a composite; the component separator is applied by the writer.
pub(crate) fn emit_svc(
    line: &ServiceLine,
    claim_index: usize,
    line_index: usize,
) -> Result<Segment> {
    let procedure_field = line_field(claim_index, line_index, "procedureCode");
    require(&procedure_field, &line.procedure_code)?;
    let procedure = line.procedure();
    let code = require(&procedure_field, procedure.code)?;
    let charge = require_amount(
        &line_field(claim_index, line_index, "chargeAmount"),
        &line.charge_amount,
    )?;
    let paid = require_amount(
        &line_field(claim_index, line_index, "paidAmount"),
        &line.paid_amount,
    )?;

    Ok(Segment::new("SVC")
        .with_composite([procedure.qualifier, code])
        .with_element(charge)
        .with_element(paid)
        // revenue code
        .with_empty(1)
        .with_element(optional(&line.units)))
}
