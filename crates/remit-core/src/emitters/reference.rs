//! Reference identification (REF).

use remit_model::{PayeeInfo, PayerInfo};
use remit_x12::Segment;

use crate::codes::{REF_PAYER_IDENTIFICATION, REF_TAX_ID};
use crate::error::Result;

use super::common::require;

/// REF*EV*{payer id}
pub(crate) fn emit_payer_reference(payer: &PayerInfo) -> Result<Segment> {
    let payer_id = require("payerInfo.id", &payer.id)?;
    Ok(reference(REF_PAYER_IDENTIFICATION, payer_id))
}

/// REF*TJ*{payee tax id}. The tax id is not format-checked.
pub(crate) fn emit_payee_tax_reference(payee: &PayeeInfo) -> Result<Segment> {
    let tax_id = require("payeeInfo.taxId", &payee.tax_id)?;
    Ok(reference(REF_TAX_ID, tax_id))
}

fn reference(qualifier: &str, value: &str) -> Segment {
    Segment::with_elements("REF", [qualifier, value])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_and_payee_references() {
        let payer = PayerInfo {
            name: "United Healthcare".to_string(),
            id: "UHC123".to_string(),
        };
        let payee = PayeeInfo {
            name: "Memorial Hospital".to_string(),
            npi: "1111111111".to_string(),
            tax_id: "111222333".to_string(),
        };
        assert_eq!(
            emit_payer_reference(&payer).unwrap(),
            Segment::with_elements("REF", ["EV", "UHC123"])
        );
        assert_eq!(
            emit_payee_tax_reference(&payee).unwrap(),
            Segment::with_elements("REF", ["TJ", "111222333"])
        );
    }

    #[test]
    fn test_non_numeric_tax_id_passes_through() {
        let payee = PayeeInfo {
            tax_id: "TAX-ID-X".to_string(),
            ..PayeeInfo::default()
        };
        assert_eq!(
            emit_payee_tax_reference(&payee).unwrap().value(2),
            Some("TAX-ID-X")
        );
    }
}
