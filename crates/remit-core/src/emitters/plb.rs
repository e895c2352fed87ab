//! Provider level adjustment (PLB).

use remit_model::PayeeInfo;
use remit_x12::Segment;

use crate::error::Result;

use super::common::require;

/// PLB*{NPI}*{fiscal date}**
///
/// Emitted for every advice. No adjustment data exists in the model, so the
/// reason and amount positions stay blank.
pub(crate) fn emit_plb(payee: &PayeeInfo, fiscal_date: &str) -> Result<Segment> {
    let npi = require("payeeInfo.npi", &payee.npi)?;
    Ok(Segment::with_elements("PLB", [npi, fiscal_date, "", ""]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plb_has_blank_adjustment() {
        let payee = PayeeInfo {
            name: "Memorial Hospital".to_string(),
            npi: "1111111111".to_string(),
            tax_id: "111222333".to_string(),
        };
        let plb = emit_plb(&payee, "20231120").unwrap();
        assert_eq!(plb.len(), 4);
        assert_eq!(plb.value(1), Some("1111111111"));
        assert_eq!(plb.value(2), Some("20231120"));
        assert_eq!(plb.value(3), Some(""));
        assert_eq!(plb.value(4), Some(""));
    }
}
