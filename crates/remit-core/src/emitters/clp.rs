//! Claim payment information (CLP).

use remit_model::Claim;
use remit_x12::Segment;

use crate::codes::CLAIM_FILING_INDICATOR;
use crate::error::Result;

use super::common::{claim_field, require, require_amount};

/// Build CLP. Charge and paid amounts are validated but written as given;
/// paid greater than charge is not an error.
///
/// | Element | Value |
/// |---------|-------|
/// | CLP01 | Patient control number |
/// | CLP02 | Claim status code |
/// | CLP03 | Total charge |
/// | CLP04 | Payment amount |
/// | CLP05 | blank (patient responsibility) |
/// | CLP06 | `12` |
/// | CLP07 | Payer claim control number (patient control number) |
/// | CLP08 | blank (facility type) |
pub(crate) fn emit_clp(claim: &Claim, claim_index: usize) -> Result<Segment> {
    let control = require(
        &claim_field(claim_index, "patientControlNumber"),
        &claim.patient_control_number,
    )?;
    let status = require(
        &claim_field(claim_index, "claimStatusCode"),
        &claim.claim_status_code,
    )?;
    let charge = require_amount(
        &claim_field(claim_index, "chargeAmount"),
        &claim.charge_amount,
    )?;
    let paid = require_amount(&claim_field(claim_index, "paidAmount"), &claim.paid_amount)?;

    Ok(Segment::new("CLP")
        .with_element(control)
        .with_element(status)
        .with_element(charge)
        .with_element(paid)
        .with_empty(1)
        .with_element(CLAIM_FILING_INDICATOR)
        .with_element(control)
        .with_empty(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    fn claim() -> Claim {
        Claim {
            patient_control_number: "CLAIM001".to_string(),
            claim_status_code: "1".to_string(),
            charge_amount: "500.00".to_string(),
            paid_amount: "450.00".to_string(),
            ..Claim::default()
        }
    }

    #[test]
    fn test_clp_layout() {
        let clp = emit_clp(&claim(), 0).unwrap();
        let values: Vec<&str> = (1..=clp.len()).filter_map(|i| clp.value(i)).collect();
        assert_eq!(
            values,
            vec!["CLAIM001", "1", "500.00", "450.00", "", "12", "CLAIM001", ""]
        );
    }

    #[test]
    fn test_paid_above_charge_passes_through() {
        let mut claim = claim();
        claim.paid_amount = "600.00".to_string();
        let clp = emit_clp(&claim, 0).unwrap();
        assert_eq!(clp.value(3), Some("500.00"));
        assert_eq!(clp.value(4), Some("600.00"));
    }

    #[test]
    fn test_missing_control_number() {
        let mut claim = claim();
        claim.patient_control_number = " ".to_string();
        assert!(matches!(
            emit_clp(&claim, 3),
            Err(GenerateError::MissingField { field }) if field == "claims[3].patientControlNumber"
        ));
    }

    #[test]
    fn test_invalid_charge_amount() {
        let mut claim = claim();
        claim.charge_amount = "5OO.00".to_string();
        assert!(matches!(
            emit_clp(&claim, 0),
            Err(GenerateError::InvalidAmount { .. })
        ));
    }
}
