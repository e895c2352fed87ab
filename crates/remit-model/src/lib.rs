//! Domain model for healthcare claim payment advice.
//!
//! A [`PaymentAdvice`] is built once by a loader (JSON, database row, request
//! body) and handed read-only to the 835 generator.

pub mod advice;

pub use advice::{
    CheckInfo, Claim, DEFAULT_PROCEDURE_QUALIFIER, PROCEDURE_QUALIFIER_SEPARATOR, PatientInfo,
    PayeeInfo, PayerInfo, PaymentAdvice, ProcedureCode, ServiceLine,
};
