//! Envelope options.

use chrono::NaiveDateTime;

/// ISA15 usage indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageIndicator {
    /// Production data (`P`, default).
    #[default]
    Production,
    /// Test data (`T`).
    Test,
}

impl UsageIndicator {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Production => "P",
            Self::Test => "T",
        }
    }
}

impl std::fmt::Display for UsageIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Values written into the ISA and GS headers.
///
/// | Field | Element | Default |
/// |-------|---------|---------|
/// | Sender qualifier / id | ISA05 / ISA06 | `ZZ` / empty |
/// | Receiver qualifier / id | ISA07 / ISA08 | `ZZ` / empty |
/// | Standards id | ISA11 | `U` |
/// | Interchange version | ISA12 | `00401` |
/// | Acknowledgment requested | ISA14 | `0` |
/// | Usage | ISA15 | `P` |
/// | Functional id | GS01 | `HP` |
/// | Application sender / receiver | GS02 / GS03 | ISA06 / ISA08 values |
/// | Responsible agency | GS07 | `X` |
/// | Implementation version | GS08 | `005010X221A1` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeOptions {
    pub sender_qualifier: String,
    pub sender_id: String,
    pub receiver_qualifier: String,
    pub receiver_id: String,
    /// GS02 (defaults to `sender_id`).
    pub application_sender: Option<String>,
    /// GS03 (defaults to `receiver_id`).
    pub application_receiver: Option<String>,
    pub standards_id: String,
    pub interchange_version: String,
    pub acknowledgment_requested: bool,
    pub usage: UsageIndicator,
    pub functional_id: String,
    pub responsible_agency: String,
    pub implementation_version: String,
    /// Generation datetime (default: current local time).
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            sender_qualifier: "ZZ".to_string(),
            sender_id: String::new(),
            receiver_qualifier: "ZZ".to_string(),
            receiver_id: String::new(),
            application_sender: None,
            application_receiver: None,
            standards_id: "U".to_string(),
            interchange_version: "00401".to_string(),
            acknowledgment_requested: false,
            usage: UsageIndicator::Production,
            functional_id: "HP".to_string(),
            responsible_agency: "X".to_string(),
            implementation_version: "005010X221A1".to_string(),
            generated_at: None,
        }
    }
}

impl EnvelopeOptions {
    /// Create envelope options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interchange sender id (ISA06).
    #[must_use]
    pub fn with_sender(mut self, id: impl Into<String>) -> Self {
        self.sender_id = id.into();
        self
    }

    /// Set the interchange receiver id (ISA08).
    #[must_use]
    pub fn with_receiver(mut self, id: impl Into<String>) -> Self {
        self.receiver_id = id.into();
        self
    }

    /// Set the sender id qualifier (ISA05).
    #[must_use]
    pub fn with_sender_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.sender_qualifier = qualifier.into();
        self
    }

    /// Set the receiver id qualifier (ISA07).
    #[must_use]
    pub fn with_receiver_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.receiver_qualifier = qualifier.into();
        self
    }

    /// Override the GS02/GS03 application codes.
    #[must_use]
    pub fn with_application_codes(
        mut self,
        sender: impl Into<String>,
        receiver: impl Into<String>,
    ) -> Self {
        self.application_sender = Some(sender.into());
        self.application_receiver = Some(receiver.into());
        self
    }

    /// Set the usage indicator.
    #[must_use]
    pub fn with_usage(mut self, usage: UsageIndicator) -> Self {
        self.usage = usage;
        self
    }

    /// Mark the interchange as test data.
    #[must_use]
    pub fn test(mut self) -> Self {
        self.usage = UsageIndicator::Test;
        self
    }

    /// Request an interchange acknowledgment (ISA14 = `1`).
    #[must_use]
    pub fn with_acknowledgment(mut self, requested: bool) -> Self {
        self.acknowledgment_requested = requested;
        self
    }

    /// Set the ISA12 interchange version.
    #[must_use]
    pub fn with_interchange_version(mut self, version: impl Into<String>) -> Self {
        self.interchange_version = version.into();
        self
    }

    /// Set the generation datetime.
    #[must_use]
    pub fn with_generated_at(mut self, datetime: NaiveDateTime) -> Self {
        self.generated_at = Some(datetime);
        self
    }

    /// Get the generation datetime (current time if not set).
    #[must_use]
    pub fn get_generated_at(&self) -> NaiveDateTime {
        self.generated_at
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    /// GS02 value.
    pub fn application_sender(&self) -> &str {
        self.application_sender.as_deref().unwrap_or(&self.sender_id)
    }

    /// GS03 value.
    pub fn application_receiver(&self) -> &str {
        self.application_receiver
            .as_deref()
            .unwrap_or(&self.receiver_id)
    }
}

/// Format a date as YYMMDD (ISA09).
pub fn format_short_date(dt: NaiveDateTime) -> String {
    dt.format("%y%m%d").to_string()
}

/// Format a date as CCYYMMDD (GS04, DTM02).
pub fn format_date(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%d").to_string()
}

/// Format a time as HHMM (ISA10, GS05).
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%H%M").to_string()
}
