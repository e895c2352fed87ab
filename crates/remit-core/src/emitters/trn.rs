//! Reassociation trace number (TRN).

use remit_model::{CheckInfo, PayerInfo};
use remit_x12::Segment;

use crate::codes::TRACE_TYPE_CURRENT;
use crate::error::Result;

use super::common::require;

/// TRN*1*{check number}*{payer id}
pub(crate) fn emit_trn(check: &CheckInfo, payer: &PayerInfo) -> Result<Segment> {
    let check_number = require("checkInfo.checkNumber", &check.check_number)?;
    let payer_id = require("payerInfo.id", &payer.id)?;
    Ok(Segment::with_elements(
        "TRN",
        [TRACE_TYPE_CURRENT, check_number, payer_id],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trn() {
        let check = CheckInfo {
            check_number: "EFT567890".to_string(),
            ..CheckInfo::default()
        };
        let payer = PayerInfo {
            name: "Blue Cross Blue Shield".to_string(),
            id: "BCBS001".to_string(),
        };
        let trn = emit_trn(&check, &payer).unwrap();
        assert_eq!(trn, Segment::with_elements("TRN", ["1", "EFT567890", "BCBS001"]));
    }

    #[test]
    fn test_trn_requires_check_number() {
        let payer = PayerInfo {
            name: "P".to_string(),
            id: "P1".to_string(),
        };
        assert!(emit_trn(&CheckInfo::default(), &payer).is_err());
    }
}
