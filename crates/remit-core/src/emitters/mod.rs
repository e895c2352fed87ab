//! Segment emitters for the 835 transaction body.
//!
//! Each emitter is a pure function from a slice of the payment advice to one
//! [`Segment`](remit_x12::Segment). Required values are checked here and fail
//! with [`GenerateError::MissingField`](crate::GenerateError::MissingField);
//! amounts are validated but written as given. Only the BPR total is computed.
//!
//! | Segment | Loop | Source |
//! |---------|------|--------|
//! | BPR | Header | claims (total), payer id, check date |
//! | TRN | Header | check number, payer id |
//! | REF*EV | Header | payer id |
//! | DTM*405 | Header | generation date |
//! | N1*PR | 1000A | payer name and id |
//! | N1*PE | 1000B | payee name and NPI |
//! | REF*TJ | 1000B | payee tax id |
//! | CLP | 2100 | claim |
//! | NM1*QC | 2100 | patient |
//! | SVC | 2110 | service line |
//! | DTM*472 | 2110 | date of service |
//! | PLB | Summary | payee NPI, generation date |

use chrono::NaiveDateTime;
use remit_x12::format_date;

mod bpr;
mod clp;
mod common;
mod dtm;
mod n1;
mod nm1;
mod plb;
mod reference;
mod svc;
mod trn;

pub(crate) use bpr::emit_bpr;
pub(crate) use clp::emit_clp;
pub(crate) use dtm::{emit_production_date, emit_service_date};
pub(crate) use n1::{emit_payee_name, emit_payer_name};
pub(crate) use nm1::emit_patient_name;
pub(crate) use plb::emit_plb;
pub(crate) use reference::{emit_payee_tax_reference, emit_payer_reference};
pub(crate) use svc::emit_svc;
pub(crate) use trn::emit_trn;

/// Values shared by every emitter of one transaction.
#[derive(Debug, Clone)]
pub struct EmitContext {
    generated_at: NaiveDateTime,
    production_date: String,
}

impl EmitContext {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at,
            production_date: format_date(generated_at),
        }
    }

    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// CCYYMMDD of the generation time; used by DTM*405 and PLB02.
    pub fn production_date(&self) -> &str {
        &self.production_date
    }
}
