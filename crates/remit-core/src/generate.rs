//! End-to-end 835 generation: body assembly, enveloping and rendering.

use std::time::Instant;

use chrono::NaiveDateTime;
use remit_model::PaymentAdvice;
use remit_x12::{
    ControlNumberSource, DelimiterPolicy, Delimiters, EnvelopeOptions, Segment, to_x12_string,
    wrap_transaction,
};
use rust_decimal::Decimal;
use tracing::{debug, info, info_span, warn};

use crate::amount::{format_amount, parse_optional_amount, total_paid};
use crate::assembler::{assemble_835, check_structure};
use crate::codes::TRANSACTION_SET_835;
use crate::emitters::EmitContext;
use crate::error::Result;

/// Options for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Interchange and functional group header settings.
    pub envelope: EnvelopeOptions,
    /// Separators used to render the document.
    pub delimiters: Delimiters,
    /// What to do when a data value contains an active separator.
    pub delimiter_policy: DelimiterPolicy,
}

impl GenerateOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options addressed from the payer (sender) to the payee tax id (receiver).
    pub fn for_advice(advice: &PaymentAdvice) -> Self {
        Self::new().with_envelope(
            EnvelopeOptions::new()
                .with_sender(advice.payer_info.id.trim())
                .with_receiver(advice.payee_info.tax_id.trim()),
        )
    }

    /// Set the envelope options.
    #[must_use]
    pub fn with_envelope(mut self, envelope: EnvelopeOptions) -> Self {
        self.envelope = envelope;
        self
    }

    /// Set the separators.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Set the delimiter collision policy.
    #[must_use]
    pub fn with_delimiter_policy(mut self, policy: DelimiterPolicy) -> Self {
        self.delimiter_policy = policy;
        self
    }

    /// Fix the generation time.
    #[must_use]
    pub fn with_generated_at(mut self, datetime: NaiveDateTime) -> Self {
        self.envelope = self.envelope.with_generated_at(datetime);
        self
    }

    /// Envelope options with blank sender/receiver filled from the advice.
    fn resolve_envelope(&self, advice: &PaymentAdvice) -> EnvelopeOptions {
        let mut envelope = self.envelope.clone();
        if envelope.sender_id.trim().is_empty() {
            envelope.sender_id = advice.payer_info.id.trim().to_string();
        }
        if envelope.receiver_id.trim().is_empty() {
            envelope.receiver_id = advice.payee_info.tax_id.trim().to_string();
        }
        envelope
    }
}

/// A generated 835 interchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Remittance835 {
    /// Rendered X12 text, `ISA` through `IEA`.
    pub text: String,
    /// The full enveloped segment sequence.
    pub segments: Vec<Segment>,
    /// Recomputed payment total (BPR02).
    pub total_paid: Decimal,
    pub claim_count: usize,
    pub service_line_count: usize,
    /// SE01: segments from ST through SE.
    pub transaction_segment_count: usize,
    /// ISA13.
    pub interchange_control_number: String,
    /// GS06.
    pub group_control_number: String,
    /// ST02.
    pub transaction_control_number: String,
    /// Time stamped into ISA09/10, GS04/05, DTM*405 and PLB02.
    pub generated_at: NaiveDateTime,
}

impl Remittance835 {
    /// Total paid as written in BPR02.
    pub fn total_paid_text(&self) -> String {
        format_amount(self.total_paid)
    }
}

/// Generate a complete 835 interchange for one payment advice.
///
/// The clock is read once (unless fixed in the options) and every date and
/// time in the output derives from that instant. Control numbers are drawn
/// from `controls`. Any failure aborts without producing output.
pub fn generate_835(
    advice: &PaymentAdvice,
    options: &GenerateOptions,
    controls: &mut dyn ControlNumberSource,
) -> Result<Remittance835> {
    let span = info_span!(
        "generate_835",
        claims = advice.claim_count(),
        service_lines = advice.service_line_count()
    );
    let _guard = span.enter();
    let start = Instant::now();

    options.delimiters.validate()?;
    check_structure(advice)?;

    let envelope = options.resolve_envelope(advice);
    let generated_at = envelope.get_generated_at();
    let envelope = envelope.with_generated_at(generated_at);
    let context = EmitContext::new(generated_at);

    let total = total_paid(&advice.claims)?;
    check_declared_amount(advice, total)?;

    let body = assemble_835(advice, &context)?;
    let body_len = body.len();
    debug!(body_segments = body_len, "transaction body assembled");

    let segments = wrap_transaction(
        envelope,
        &options.delimiters,
        controls,
        TRANSACTION_SET_835,
        body,
    )?;
    let text = to_x12_string(&segments, &options.delimiters, options.delimiter_policy)?;

    let remittance = Remittance835 {
        interchange_control_number: control_number(&segments, "ISA", 13),
        group_control_number: control_number(&segments, "GS", 6),
        transaction_control_number: control_number(&segments, "ST", 2),
        text,
        segments,
        total_paid: total,
        claim_count: advice.claim_count(),
        service_line_count: advice.service_line_count(),
        transaction_segment_count: body_len + 2,
        generated_at,
    };
    info!(
        interchange_control_number = %remittance.interchange_control_number,
        total_paid = %remittance.total_paid_text(),
        segments = remittance.segments.len(),
        duration_ms = start.elapsed().as_millis(),
        "835 generated"
    );
    Ok(remittance)
}

/// Warn when the declared check amount disagrees with the claims.
///
/// The declared amount is never emitted, but a non-blank value that is not a
/// valid amount is still an input error.
fn check_declared_amount(advice: &PaymentAdvice, total: Decimal) -> Result<()> {
    let declared =
        parse_optional_amount("checkInfo.checkAmount", &advice.check_info.check_amount)?;
    if let Some(declared) = declared.filter(|declared| *declared != total) {
        warn!(
            declared = %format_amount(declared),
            computed = %format_amount(total),
            "check amount differs from the sum of claim payments; using the computed total"
        );
    }
    Ok(())
}

fn control_number(segments: &[Segment], tag: &str, position: usize) -> String {
    segments
        .iter()
        .find(|segment| segment.tag() == tag)
        .and_then(|segment| segment.value(position))
        .unwrap_or_default()
        .to_string()
}
