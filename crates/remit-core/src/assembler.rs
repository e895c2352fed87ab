//! Transaction set body assembly.
//!
//! Produces the segments between ST and SE in the fixed 835 order:
//!
//! ```text
//! BPR TRN REF*EV DTM*405 N1*PR N1*PE REF*TJ
//!   (CLP NM1 (SVC DTM*472)*)*
//! PLB
//! ```

use remit_model::PaymentAdvice;
use remit_x12::Segment;
use tracing::debug;

use crate::emitters::{
    EmitContext, emit_bpr, emit_clp, emit_patient_name, emit_payee_name,
    emit_payee_tax_reference, emit_payer_name, emit_payer_reference, emit_plb,
    emit_production_date, emit_service_date, emit_svc, emit_trn,
};
use crate::error::{GenerateError, Result};

/// Reject advices that cannot form a valid 835 before emitting anything.
pub fn check_structure(advice: &PaymentAdvice) -> Result<()> {
    if advice.claims.is_empty() {
        return Err(GenerateError::EmptyClaimSet);
    }
    if let Some(claim) = advice
        .claims
        .iter()
        .find(|claim| claim.service_lines.is_empty())
    {
        return Err(GenerateError::EmptyServiceLineSet {
            patient_control_number: claim.patient_control_number.trim().to_string(),
        });
    }
    Ok(())
}

/// Build the 835 body for one payment advice.
pub fn assemble_835(advice: &PaymentAdvice, context: &EmitContext) -> Result<Vec<Segment>> {
    check_structure(advice)?;

    // header, payer and payee loops, claims with two segments per line, PLB
    let mut body =
        Vec::with_capacity(8 + advice.claim_count() * 2 + advice.service_line_count() * 2);
    body.push(emit_bpr(advice)?);
    body.push(emit_trn(&advice.check_info, &advice.payer_info)?);
    body.push(emit_payer_reference(&advice.payer_info)?);
    body.push(emit_production_date(context.production_date()));
    body.push(emit_payer_name(&advice.payer_info)?);
    body.push(emit_payee_name(&advice.payee_info)?);
    body.push(emit_payee_tax_reference(&advice.payee_info)?);

    for (claim_index, claim) in advice.claims.iter().enumerate() {
        body.push(emit_clp(claim, claim_index)?);
        body.push(emit_patient_name(&claim.patient_info, claim_index)?);
        for (line_index, line) in claim.service_lines.iter().enumerate() {
            body.push(emit_svc(line, claim_index, line_index)?);
            body.push(emit_service_date(line, claim_index, line_index)?);
        }
        debug!(
            claim_index,
            service_lines = claim.service_lines.len(),
            "claim assembled"
        );
    }

    body.push(emit_plb(&advice.payee_info, context.production_date())?);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use remit_model::{CheckInfo, Claim, PatientInfo, PayeeInfo, PayerInfo, ServiceLine};

    fn context() -> EmitContext {
        EmitContext::new(
            NaiveDate::from_ymd_opt(2023, 11, 20)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
        )
    }

    fn line(code: &str) -> ServiceLine {
        ServiceLine {
            procedure_code: code.to_string(),
            charge_amount: "100.00".to_string(),
            paid_amount: "80.00".to_string(),
            units: "1".to_string(),
            date_of_service: "20231101".to_string(),
        }
    }

    fn claim(control: &str, lines: Vec<ServiceLine>) -> Claim {
        Claim {
            patient_control_number: control.to_string(),
            claim_status_code: "1".to_string(),
            charge_amount: "100.00".to_string(),
            paid_amount: "80.00".to_string(),
            patient_info: PatientInfo {
                last_name: "Doe".to_string(),
                first_name: "Jane".to_string(),
                member_id: "M1".to_string(),
            },
            service_lines: lines,
        }
    }

    fn advice(claims: Vec<Claim>) -> PaymentAdvice {
        PaymentAdvice {
            payer_info: PayerInfo {
                name: "Payer".to_string(),
                id: "P1".to_string(),
            },
            payee_info: PayeeInfo {
                name: "Clinic".to_string(),
                npi: "1234567890".to_string(),
                tax_id: "123456789".to_string(),
            },
            check_info: CheckInfo {
                check_number: "CHK1".to_string(),
                check_date: "20231120".to_string(),
                check_amount: String::new(),
            },
            claims,
        }
    }

    fn tags(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(Segment::tag).collect()
    }

    #[test]
    fn test_body_order() {
        let advice = advice(vec![
            claim("A", vec![line("99213"), line("99214")]),
            claim("B", vec![line("97110")]),
        ]);
        let body = assemble_835(&advice, &context()).unwrap();
        assert_eq!(
            tags(&body),
            vec![
                "BPR", "TRN", "REF", "DTM", "N1", "N1", "REF", "CLP", "NM1", "SVC", "DTM", "SVC",
                "DTM", "CLP", "NM1", "SVC", "DTM", "PLB",
            ]
        );
        assert_eq!(body[3].value(2), Some("20231120"));
        assert_eq!(body.last().unwrap().value(2), Some("20231120"));
    }

    #[test]
    fn test_empty_claims_rejected() {
        assert!(matches!(
            assemble_835(&advice(Vec::new()), &context()),
            Err(GenerateError::EmptyClaimSet)
        ));
    }

    #[test]
    fn test_claim_without_lines_rejected() {
        let advice = advice(vec![claim("A", vec![line("99213")]), claim("B", Vec::new())]);
        assert!(matches!(
            assemble_835(&advice, &context()),
            Err(GenerateError::EmptyServiceLineSet { patient_control_number }) if patient_control_number == "B"
        ));
    }
}
