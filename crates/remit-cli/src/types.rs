use std::path::PathBuf;

use chrono::NaiveDateTime;
use remit_x12::UsageIndicator;

/// Outcome of one `generate` run, for the summary table.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub input: PathBuf,
    /// `None` when the document went to stdout.
    pub output: Option<PathBuf>,
    pub payer_name: String,
    pub payee_name: String,
    pub claim_count: usize,
    pub service_line_count: usize,
    pub segment_count: usize,
    pub transaction_segment_count: usize,
    pub total_paid: String,
    pub declared_check_amount: Option<String>,
    pub interchange_control_number: String,
    pub group_control_number: String,
    pub transaction_control_number: String,
    pub usage: UsageIndicator,
    pub generated_at: NaiveDateTime,
    pub bytes_written: usize,
}

impl GenerateResult {
    /// True when a declared check amount exists and differs from the total.
    pub fn check_amount_differs(&self) -> bool {
        self.declared_check_amount
            .as_deref()
            .is_some_and(|declared| declared != self.total_paid)
    }
}
