//! Payment advice types.
//!
//! These mirror the JSON documents handed to the generator: field names are
//! `camelCase` on the wire and every field defaults to empty so that an absent
//! value reaches the generator as a blank and is reported there by name.

use serde::{Deserialize, Deserializer, Serialize};

/// Qualifier applied to procedure codes that carry none (HCPCS/CPT).
pub const DEFAULT_PROCEDURE_QUALIFIER: &str = "HC";

/// Separator between qualifier and code in a procedure code string.
pub const PROCEDURE_QUALIFIER_SEPARATOR: char = ':';

/// Root of a remittance: one payer paying one payee for a list of claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentAdvice {
    pub payer_info: PayerInfo,
    pub payee_info: PayeeInfo,
    pub check_info: CheckInfo,
    pub claims: Vec<Claim>,
}

impl PaymentAdvice {
    /// Number of claims in the advice.
    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Number of service lines across all claims.
    pub fn service_line_count(&self) -> usize {
        self.claims.iter().map(|claim| claim.service_lines.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayerInfo {
    pub name: String,
    /// Used as interchange sender and payer reference.
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayeeInfo {
    pub name: String,
    /// National Provider Identifier (10 digits, not validated).
    pub npi: String,
    /// Federal tax id (9 digits, not validated).
    pub tax_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckInfo {
    /// Check or EFT trace number.
    pub check_number: String,
    /// CCYYMMDD.
    pub check_date: String,
    #[serde(deserialize_with = "text_or_number")]
    pub check_amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Claim {
    pub patient_control_number: String,
    /// Claim status code, e.g. `1` for processed as primary.
    #[serde(deserialize_with = "text_or_number")]
    pub claim_status_code: String,
    #[serde(deserialize_with = "text_or_number")]
    pub charge_amount: String,
    #[serde(deserialize_with = "text_or_number")]
    pub paid_amount: String,
    pub patient_info: PatientInfo,
    pub service_lines: Vec<ServiceLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientInfo {
    pub last_name: String,
    pub first_name: String,
    pub member_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceLine {
    /// Either a bare code (`99214`) or `QUALIFIER:CODE` (`HC:99214`).
    pub procedure_code: String,
    #[serde(deserialize_with = "text_or_number")]
    pub charge_amount: String,
    #[serde(deserialize_with = "text_or_number")]
    pub paid_amount: String,
    #[serde(deserialize_with = "text_or_number")]
    pub units: String,
    /// CCYYMMDD.
    pub date_of_service: String,
}

impl ServiceLine {
    /// Split the procedure code into its qualifier and code parts.
    pub fn procedure(&self) -> ProcedureCode<'_> {
        ProcedureCode::parse(&self.procedure_code)
    }
}

/// A procedure code with its code-list qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureCode<'a> {
    pub qualifier: &'a str,
    pub code: &'a str,
}

impl<'a> ProcedureCode<'a> {
    pub fn parse(value: &'a str) -> Self {
        let value = value.trim();
        match value.split_once(PROCEDURE_QUALIFIER_SEPARATOR) {
            Some((qualifier, code)) if !qualifier.trim().is_empty() => Self {
                qualifier: qualifier.trim(),
                code: code.trim(),
            },
            Some((_, code)) => Self {
                qualifier: DEFAULT_PROCEDURE_QUALIFIER,
                code: code.trim(),
            },
            None => Self {
                qualifier: DEFAULT_PROCEDURE_QUALIFIER,
                code: value,
            },
        }
    }
}

/// Accept a JSON string or number and keep its textual form.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Unsigned(value) => value.to_string(),
        Raw::Signed(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}
