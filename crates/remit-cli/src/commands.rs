use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use remit_core::amount::parse_optional_amount;
use remit_core::{GenerateOptions, format_amount, generate_835};
use remit_model::PaymentAdvice;
use remit_x12::{DelimiterPolicy, Delimiters, SequentialControlNumbers, UsageIndicator};
use tracing::{debug, info, info_span, trace};

use crate::cli::{GenerateArgs, SampleArgs};
use crate::logging::redact_value;
use crate::samples::sample_advice;
use crate::types::GenerateResult;

/// Load a payment advice JSON document.
pub fn load_advice(path: &Path) -> Result<PaymentAdvice> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

/// Translate CLI flags into generation options for `advice`.
pub fn generate_options(args: &GenerateArgs, advice: &PaymentAdvice) -> Result<GenerateOptions> {
    let delimiters = Delimiters::new(
        args.element_separator,
        args.component_separator,
        args.segment_terminator,
    )
    .context("separator flags")?
    .with_line_breaks(args.line_breaks);

    let mut envelope = GenerateOptions::for_advice(advice).envelope;
    if let Some(sender) = &args.sender_id {
        envelope = envelope.with_sender(sender.trim());
    }
    if let Some(receiver) = &args.receiver_id {
        envelope = envelope.with_receiver(receiver.trim());
    }
    if args.test {
        envelope = envelope.test();
    }
    if let Some(generated_at) = args.generated_at {
        envelope = envelope.with_generated_at(generated_at);
    }

    Ok(GenerateOptions::new()
        .with_envelope(envelope)
        .with_delimiters(delimiters)
        .with_delimiter_policy(if args.reject_delimiters {
            DelimiterPolicy::Reject
        } else {
            DelimiterPolicy::PassThrough
        }))
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", input = %args.input.display());
    let _guard = span.enter();

    let advice = load_advice(&args.input)?;
    for claim in &advice.claims {
        trace!(
            patient_control_number = %redact_value(&claim.patient_control_number),
            patient = %redact_value(&claim.patient_info.last_name),
            service_lines = claim.service_lines.len(),
            "claim loaded"
        );
    }

    let options = generate_options(args, &advice)?;
    let usage = options.envelope.usage;
    let mut controls = SequentialControlNumbers::starting_at(args.control_number);
    let remittance = generate_835(&advice, &options, &mut controls)
        .with_context(|| format!("generate 835 from {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &remittance.text)
                .with_context(|| format!("write {}", path.display()))?;
            info!(output = %path.display(), bytes = remittance.text.len(), "835 written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(remittance.text.as_bytes())
                .context("write stdout")?;
            if !options.delimiters.line_break {
                writeln!(stdout).context("write stdout")?;
            }
            stdout.flush().context("flush stdout")?;
            debug!(bytes = remittance.text.len(), "835 written to stdout");
        }
    }

    let declared_check_amount =
        parse_optional_amount("checkInfo.checkAmount", &advice.check_info.check_amount)
            .ok()
            .flatten()
            .map(format_amount);

    Ok(GenerateResult {
        input: args.input.clone(),
        output: args.output.clone(),
        payer_name: advice.payer_info.name.trim().to_string(),
        payee_name: advice.payee_info.name.trim().to_string(),
        claim_count: remittance.claim_count,
        service_line_count: remittance.service_line_count,
        segment_count: remittance.segments.len(),
        transaction_segment_count: remittance.transaction_segment_count,
        total_paid: remittance.total_paid_text(),
        declared_check_amount,
        interchange_control_number: remittance.interchange_control_number.clone(),
        group_control_number: remittance.group_control_number.clone(),
        transaction_control_number: remittance.transaction_control_number.clone(),
        usage,
        generated_at: remittance.generated_at,
        bytes_written: remittance.text.len(),
    })
}

pub fn run_sample(args: &SampleArgs) -> Result<()> {
    let advice = sample_advice(args.kind);
    let json = serde_json::to_string_pretty(&advice).context("serialize sample")?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(output = %path.display(), kind = ?args.kind, "sample written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Envelope usage label for display.
pub fn usage_label(usage: UsageIndicator) -> &'static str {
    match usage {
        UsageIndicator::Production => "production",
        UsageIndicator::Test => "test",
    }
}
