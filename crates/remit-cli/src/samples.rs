//! Built-in sample payment advices.

use remit_model::{CheckInfo, Claim, PatientInfo, PayeeInfo, PayerInfo, PaymentAdvice, ServiceLine};

use crate::cli::SampleKindArg;

/// The sample document for `kind`.
pub fn sample_advice(kind: SampleKindArg) -> PaymentAdvice {
    match kind {
        SampleKindArg::Simple => simple_advice(),
        SampleKindArg::Complex => complex_advice(),
    }
}

/// One claim, one office visit.
pub fn simple_advice() -> PaymentAdvice {
    PaymentAdvice {
        payer_info: payer("Blue Cross Blue Shield", "BCBS001"),
        payee_info: payee("City Medical Center", "9876543210", "987654321"),
        check_info: check("EFT567890", "20231120", "450.00"),
        claims: vec![claim(
            "CLAIM001",
            ("500.00", "450.00"),
            patient("Anderson", "Mary", "MBR001234"),
            vec![line("99214", "500.00", "450.00", "20231110")],
        )],
    }
}

/// Two claims with three service lines each, paying 2250.00 in total.
pub fn complex_advice() -> PaymentAdvice {
    PaymentAdvice {
        payer_info: payer("United Healthcare", "UHC123"),
        payee_info: payee("Memorial Hospital", "1111111111", "111222333"),
        check_info: check("CHK789456", "20231120", "2250.00"),
        claims: vec![
            claim(
                "CLM12345",
                ("1500.00", "1350.00"),
                patient("Williams", "Robert", "UHC987654"),
                vec![
                    line("99215", "750.00", "675.00", "20231105"),
                    line("85025", "250.00", "225.00", "20231105"),
                    line("80053", "500.00", "450.00", "20231105"),
                ],
            ),
            claim(
                "CLM12346",
                ("1000.00", "900.00"),
                patient("Davis", "Jennifer", "UHC654321"),
                vec![
                    line("99213", "400.00", "360.00", "20231106"),
                    line("90471", "250.00", "225.00", "20231106"),
                    line("90670", "350.00", "315.00", "20231106"),
                ],
            ),
        ],
    }
}

fn payer(name: &str, id: &str) -> PayerInfo {
    PayerInfo {
        name: name.to_string(),
        id: id.to_string(),
    }
}

fn payee(name: &str, npi: &str, tax_id: &str) -> PayeeInfo {
    PayeeInfo {
        name: name.to_string(),
        npi: npi.to_string(),
        tax_id: tax_id.to_string(),
    }
}

fn check(number: &str, date: &str, amount: &str) -> CheckInfo {
    CheckInfo {
        check_number: number.to_string(),
        check_date: date.to_string(),
        check_amount: amount.to_string(),
    }
}

fn patient(last: &str, first: &str, member_id: &str) -> PatientInfo {
    PatientInfo {
        last_name: last.to_string(),
        first_name: first.to_string(),
        member_id: member_id.to_string(),
    }
}

// Status 1: processed as primary.
fn claim(
    control: &str,
    (charge, paid): (&str, &str),
    patient_info: PatientInfo,
    service_lines: Vec<ServiceLine>,
) -> Claim {
    Claim {
        patient_control_number: control.to_string(),
        claim_status_code: "1".to_string(),
        charge_amount: charge.to_string(),
        paid_amount: paid.to_string(),
        patient_info,
        service_lines,
    }
}

fn line(code: &str, charge: &str, paid: &str, date: &str) -> ServiceLine {
    ServiceLine {
        procedure_code: code.to_string(),
        charge_amount: charge.to_string(),
        paid_amount: paid.to_string(),
        units: "1".to_string(),
        date_of_service: date.to_string(),
    }
}
