//! Property tests for totals and segment counts.

use chrono::NaiveDate;
use proptest::prelude::*;
use remit_core::{GenerateOptions, generate_835};
use remit_model::{CheckInfo, Claim, PatientInfo, PayeeInfo, PayerInfo, PaymentAdvice, ServiceLine};
use remit_x12::FixedControlNumbers;
use rust_decimal::Decimal;

fn cents(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

fn advice(claims: &[Vec<u64>]) -> PaymentAdvice {
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
            check_date: "20240102".to_string(),
            check_amount: String::new(),
        },
        claims: claims
            .iter()
            .enumerate()
            .map(|(index, lines)| {
                let paid: u64 = lines.iter().sum();
                Claim {
                    patient_control_number: format!("CLM{index}"),
                    claim_status_code: "1".to_string(),
                    charge_amount: cents(paid + 100),
                    paid_amount: cents(paid),
                    patient_info: PatientInfo {
                        last_name: "Doe".to_string(),
                        first_name: String::new(),
                        member_id: format!("M{index}"),
                    },
                    service_lines: lines
                        .iter()
                        .map(|&line_paid| ServiceLine {
                            procedure_code: "99213".to_string(),
                            charge_amount: cents(line_paid),
                            paid_amount: cents(line_paid),
                            units: String::new(),
                            date_of_service: "20240101".to_string(),
                        })
                        .collect(),
                }
            })
            .collect(),
    }
}

fn claim_sets() -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(prop::collection::vec(0u64..5_000_000, 1..5), 1..6)
}

proptest! {
    #[test]
    fn test_bpr_total_is_sum_of_claim_payments(claims in claim_sets()) {
        let advice = advice(&claims);
        let generated_at = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let options = GenerateOptions::for_advice(&advice).with_generated_at(generated_at);
        let remittance = generate_835(&advice, &options, &mut FixedControlNumbers::new(1, 1, 1)).unwrap();

        let expected_cents: u64 = claims.iter().flatten().sum();
        let expected = Decimal::new(i64::try_from(expected_cents).unwrap(), 2);
        prop_assert_eq!(remittance.total_paid, expected);

        let bpr = remittance.segments.iter().find(|s| s.tag() == "BPR").unwrap();
        let expected_bpr = cents(expected_cents);
        prop_assert_eq!(bpr.value(2), Some(expected_bpr.as_str()));
    }

    #[test]
    fn test_se_count_matches_structure(claims in claim_sets()) {
        let advice = advice(&claims);
        let options = GenerateOptions::for_advice(&advice)
            .with_generated_at(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap());
        let remittance = generate_835(&advice, &options, &mut FixedControlNumbers::new(1, 1, 1)).unwrap();

        let lines: usize = claims.iter().map(Vec::len).sum();
        // ST, 7 header segments, CLP + NM1 per claim, SVC + DTM per line, PLB, SE
        let expected = 2 + 7 + 2 * claims.len() + 2 * lines + 1;
        let se = remittance.segments.iter().find(|s| s.tag() == "SE").unwrap();
        let expected_se = expected.to_string();
        prop_assert_eq!(se.value(1), Some(expected_se.as_str()));
        prop_assert_eq!(remittance.transaction_segment_count, expected);
        prop_assert_eq!(remittance.segments.len(), expected + 4);
    }
}
