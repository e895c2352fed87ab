//! Fixed code values of the 835 implementation guide used by the emitters.

/// ST01 transaction set identifier.
pub const TRANSACTION_SET_835: &str = "835";

/// BPR01 handling code: remittance information only.
pub const HANDLING_INFORMATION_ONLY: &str = "I";
/// BPR03 credit/debit flag: credit.
pub const CREDIT: &str = "C";
/// BPR04 payment method: automated clearing house.
pub const PAYMENT_METHOD_ACH: &str = "ACH";

/// TRN01 trace type: current transaction trace numbers.
pub const TRACE_TYPE_CURRENT: &str = "1";

/// REF01 qualifier: receiver identification (payer reference).
pub const REF_PAYER_IDENTIFICATION: &str = "EV";
/// REF01 qualifier: federal taxpayer identification number.
pub const REF_TAX_ID: &str = "TJ";

/// DTM01 qualifier: production date.
pub const DATE_PRODUCTION: &str = "405";
/// DTM01 qualifier: service date.
pub const DATE_SERVICE: &str = "472";

/// N101 entity: payer.
pub const ENTITY_PAYER: &str = "PR";
/// N101 entity: payee.
pub const ENTITY_PAYEE: &str = "PE";
/// N103 qualifier for the payer identifier.
pub const ID_PAYER: &str = "XV";
/// N103 qualifier: National Provider Identifier.
pub const ID_NPI: &str = "XX";

/// CLP06 claim filing indicator.
pub const CLAIM_FILING_INDICATOR: &str = "12";

/// NM101 entity: patient.
pub const ENTITY_PATIENT: &str = "QC";
/// NM102 entity type: person.
pub const ENTITY_TYPE_PERSON: &str = "1";
/// NM108 qualifier: member identification number.
pub const ID_MEMBER: &str = "MI";
