//! X12 835 Health Care Claim Payment/Advice generation.
//!
//! Turns a [`PaymentAdvice`](remit_model::PaymentAdvice) into a complete
//! interchange: the 835 body is assembled from segment emitters in a fixed
//! order, wrapped in ISA/GS/ST envelopes by `remit-x12`, and rendered to text.
//!
//! ```
//! use chrono::NaiveDate;
//! use remit_core::{GenerateOptions, generate_835};
//! use remit_model::{CheckInfo, Claim, PatientInfo, PayeeInfo, PayerInfo, PaymentAdvice, ServiceLine};
//! use remit_x12::FixedControlNumbers;
//!
//! let advice = PaymentAdvice {
//!     payer_info: PayerInfo { name: "Payer".into(), id: "P1".into() },
//!     payee_info: PayeeInfo { name: "Clinic".into(), npi: "1234567890".into(), tax_id: "123456789".into() },
//!     check_info: CheckInfo { check_number: "CHK1".into(), check_date: "20231120".into(), check_amount: String::new() },
//!     claims: vec![Claim {
//!         patient_control_number: "CLM1".into(),
//!         claim_status_code: "1".into(),
//!         charge_amount: "100.00".into(),
//!         paid_amount: "80.00".into(),
//!         patient_info: PatientInfo { last_name: "Doe".into(), first_name: "Jane".into(), member_id: "M1".into() },
//!         service_lines: vec![ServiceLine {
//!             procedure_code: "99213".into(),
//!             charge_amount: "100.00".into(),
//!             paid_amount: "80.00".into(),
//!             units: "1".into(),
//!             date_of_service: "20231101".into(),
//!         }],
//!     }],
//! };
//!
//! let generated_at = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let options = GenerateOptions::for_advice(&advice).with_generated_at(generated_at);
//! let remittance = generate_835(&advice, &options, &mut FixedControlNumbers::new(1, 1, 1)).unwrap();
//! assert!(remittance.text.contains("BPR*I*80.00*C*ACH"));
//! assert_eq!(remittance.transaction_segment_count, 14);
//! ```

pub mod amount;
pub mod assembler;
pub mod codes;
pub mod emitters;
mod error;
pub mod generate;

pub use amount::{format_amount, parse_amount, total_paid};
pub use assembler::assemble_835;
pub use emitters::EmitContext;
pub use error::{GenerateError, Result};
pub use generate::{GenerateOptions, Remittance835, generate_835};
