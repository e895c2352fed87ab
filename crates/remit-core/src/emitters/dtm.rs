//! Date/time reference (DTM).

use remit_model::ServiceLine;
use remit_x12::Segment;

use crate::codes::{DATE_PRODUCTION, DATE_SERVICE};
use crate::error::Result;

use super::common::{line_field, require};

/// DTM*405*{CCYYMMDD}
pub(crate) fn emit_production_date(date: &str) -> Segment {
    Segment::with_elements("DTM", [DATE_PRODUCTION, date])
}

/// DTM*472*{date of service}
pub(crate) fn emit_service_date(
    line: &ServiceLine,
    claim_index: usize,
    line_index: usize,
) -> Result<Segment> {
    let date = require(
        &line_field(claim_index, line_index, "dateOfService"),
        &line.date_of_service,
    )?;
    Ok(Segment::with_elements("DTM", [DATE_SERVICE, date]))
}
