//! Patient name (NM1).

use remit_model::PatientInfo;
use remit_x12::Segment;

use crate::codes::{ENTITY_PATIENT, ENTITY_TYPE_PERSON, ID_MEMBER};
use crate::error::Result;

use super::common::{claim_field, optional, require};

/// NM1*QC*1*{last}*{first}****MI*{member id}
pub(crate) fn emit_patient_name(patient: &PatientInfo, claim_index: usize) -> Result<Segment> {
    let last = require(
        &claim_field(claim_index, "patientInfo.lastName"),
        &patient.last_name,
    )?;
    let member_id = require(
        &claim_field(claim_index, "patientInfo.memberId"),
        &patient.member_id,
    )?;

    Ok(Segment::new("NM1")
        .with_element(ENTITY_PATIENT)
        .with_element(ENTITY_TYPE_PERSON)
        .with_element(last)
        .with_element(optional(&patient.first_name))
        // middle name, prefix, suffix
        .with_empty(3)
        .with_element(ID_MEMBER)
        .with_element(member_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> PatientInfo {
        PatientInfo {
            last_name: "Williams".to_string(),
            first_name: "Robert".to_string(),
            member_id: "UHC987654".to_string(),
        }
    }

    #[test]
    fn test_nm1_layout() {
        let nm1 = emit_patient_name(&patient(), 0).unwrap();
        assert_eq!(nm1.len(), 9);
        assert_eq!(nm1.value(1), Some("QC"));
        assert_eq!(nm1.value(2), Some("1"));
        assert_eq!(nm1.value(3), Some("Williams"));
        assert_eq!(nm1.value(4), Some("Robert"));
        assert_eq!(nm1.value(8), Some("MI"));
        assert_eq!(nm1.value(9), Some("UHC987654"));
    }

    #[test]
    fn test_first_name_is_optional() {
        let mut patient = patient();
        patient.first_name.clear();
        let nm1 = emit_patient_name(&patient, 0).unwrap();
        assert_eq!(nm1.value(4), Some(""));
    }

    #[test]
    fn test_member_id_is_required() {
        let mut patient = patient();
        patient.member_id.clear();
        assert!(emit_patient_name(&patient, 0).is_err());
    }
}
