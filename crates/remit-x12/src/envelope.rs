//! Interchange / functional group / transaction set envelope.
//!
//! [`EnvelopeBuilder`] is a small state machine over the three nested levels.
//! Opening a level writes its header, closing it writes the trailer with the
//! count of nested units and the header's control number. Callers only push
//! body segments; counts and control numbers are never supplied by hand.
//!
//! ```
//! use remit_x12::{Delimiters, EnvelopeBuilder, EnvelopeOptions, Segment, SequentialControlNumbers};
//!
//! let mut controls = SequentialControlNumbers::new();
//! let options = EnvelopeOptions::new().with_sender("PAYER").with_receiver("PAYEE");
//! let mut builder = EnvelopeBuilder::new(options, &Delimiters::default(), &mut controls);
//! builder.open_interchange().unwrap();
//! builder.open_group().unwrap();
//! builder.open_transaction("835").unwrap();
//! builder.push(Segment::with_elements("TRN", ["1", "CHK1", "PAYER"])).unwrap();
//! builder.close_transaction().unwrap();
//! builder.close_group().unwrap();
//! builder.close_interchange().unwrap();
//! let segments = builder.finish().unwrap();
//! assert_eq!(segments.first().unwrap().tag(), "ISA");
//! assert_eq!(segments.last().unwrap().tag(), "IEA");
//! ```

use chrono::NaiveDateTime;
use tracing::debug;

use crate::control::ControlNumberSource;
use crate::delimiters::Delimiters;
use crate::error::{Result, X12Error};
use crate::options::{EnvelopeOptions, format_date, format_short_date, format_time};
use crate::segment::Segment;

/// Largest value any control number field can hold (9 digits).
pub const MAX_CONTROL_NUMBER: u64 = 999_999_999;

/// Width of ISA06/ISA08.
pub const INTERCHANGE_ID_LEN: usize = 15;

/// Width of ISA02/ISA04.
const SECURITY_INFO_LEN: usize = 10;

struct OpenInterchange {
    control: String,
    groups: usize,
}

struct OpenGroup {
    control: String,
    transactions: usize,
}

struct OpenTransaction {
    control: String,
    start: usize,
}

/// Builds a fully enveloped segment sequence.
pub struct EnvelopeBuilder<'a> {
    options: EnvelopeOptions,
    generated_at: NaiveDateTime,
    component_separator: char,
    controls: &'a mut dyn ControlNumberSource,
    segments: Vec<Segment>,
    interchange: Option<OpenInterchange>,
    group: Option<OpenGroup>,
    transaction: Option<OpenTransaction>,
    completed: usize,
}

impl<'a> EnvelopeBuilder<'a> {
    /// Create a builder. The generation time is fixed here so every header
    /// produced by this builder carries the same date and time.
    pub fn new(
        options: EnvelopeOptions,
        delimiters: &Delimiters,
        controls: &'a mut dyn ControlNumberSource,
    ) -> Self {
        let generated_at = options.get_generated_at();
        Self {
            options,
            generated_at,
            component_separator: delimiters.component,
            controls,
            segments: Vec::new(),
            interchange: None,
            group: None,
            transaction: None,
            completed: 0,
        }
    }

    /// Generation datetime written to ISA09/ISA10 and GS04/GS05.
    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Write the ISA header.
    pub fn open_interchange(&mut self) -> Result<()> {
        if self.interchange.is_some() {
            return Err(X12Error::envelope_state("interchange already open"));
        }
        let control = interchange_control(self.controls.next_interchange())?;
        let isa = build_isa(
            &self.options,
            self.generated_at,
            &control,
            self.component_separator,
        )?;
        self.segments.push(isa);
        self.interchange = Some(OpenInterchange { control, groups: 0 });
        Ok(())
    }

    /// Write a GS header inside the open interchange.
    pub fn open_group(&mut self) -> Result<()> {
        if self.interchange.is_none() {
            return Err(X12Error::envelope_state(
                "functional group opened outside an interchange",
            ));
        }
        if self.group.is_some() {
            return Err(X12Error::envelope_state("functional group already open"));
        }
        let control = group_control(self.controls.next_group())?;
        self.segments
            .push(build_gs(&self.options, self.generated_at, &control));
        self.group = Some(OpenGroup {
            control,
            transactions: 0,
        });
        Ok(())
    }

    /// Write an ST header inside the open functional group.
    pub fn open_transaction(&mut self, type_code: &str) -> Result<()> {
        if self.group.is_none() {
            return Err(X12Error::envelope_state(
                "transaction set opened outside a functional group",
            ));
        }
        if self.transaction.is_some() {
            return Err(X12Error::envelope_state("transaction set already open"));
        }
        let control = transaction_control(self.controls.next_transaction())?;
        let start = self.segments.len();
        self.segments
            .push(Segment::with_elements("ST", [type_code, control.as_str()]));
        self.transaction = Some(OpenTransaction { control, start });
        Ok(())
    }

    /// Append a body segment to the open transaction set.
    pub fn push(&mut self, segment: Segment) -> Result<()> {
        if self.transaction.is_none() {
            return Err(X12Error::envelope_state(format!(
                "{} segment pushed outside a transaction set",
                segment.tag()
            )));
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Append several body segments to the open transaction set.
    pub fn extend<I>(&mut self, segments: I) -> Result<()>
    where
        I: IntoIterator<Item = Segment>,
    {
        for segment in segments {
            self.push(segment)?;
        }
        Ok(())
    }

    /// Write the SE trailer. Returns the segment count written to SE01.
    pub fn close_transaction(&mut self) -> Result<usize> {
        let Some(transaction) = self.transaction.take() else {
            return Err(X12Error::envelope_state("no transaction set to close"));
        };
        // ST through SE inclusive
        let count = self.segments.len() - transaction.start + 1;
        self.segments.push(Segment::with_elements(
            "SE",
            [count.to_string(), transaction.control.clone()],
        ));
        if let Some(group) = self.group.as_mut() {
            group.transactions += 1;
        }
        debug!(control = %transaction.control, segments = count, "closed transaction set");
        Ok(count)
    }

    /// Write the GE trailer.
    pub fn close_group(&mut self) -> Result<()> {
        if self.transaction.is_some() {
            return Err(X12Error::envelope_state(
                "functional group closed with an open transaction set",
            ));
        }
        let Some(group) = self.group.take() else {
            return Err(X12Error::envelope_state("no functional group to close"));
        };
        self.segments.push(Segment::with_elements(
            "GE",
            [group.transactions.to_string(), group.control.clone()],
        ));
        if let Some(interchange) = self.interchange.as_mut() {
            interchange.groups += 1;
        }
        debug!(control = %group.control, transactions = group.transactions, "closed functional group");
        Ok(())
    }

    /// Write the IEA trailer.
    pub fn close_interchange(&mut self) -> Result<()> {
        if self.group.is_some() {
            return Err(X12Error::envelope_state(
                "interchange closed with an open functional group",
            ));
        }
        let Some(interchange) = self.interchange.take() else {
            return Err(X12Error::envelope_state("no interchange to close"));
        };
        self.segments.push(Segment::with_elements(
            "IEA",
            [interchange.groups.to_string(), interchange.control.clone()],
        ));
        self.completed += 1;
        debug!(control = %interchange.control, groups = interchange.groups, "closed interchange");
        Ok(())
    }

    /// Return the finished segment sequence.
    pub fn finish(self) -> Result<Vec<Segment>> {
        if self.interchange.is_some() || self.group.is_some() || self.transaction.is_some() {
            return Err(X12Error::envelope_state(
                "envelope finished with open levels",
            ));
        }
        if self.completed == 0 {
            return Err(X12Error::envelope_state("no interchange was built"));
        }
        Ok(self.segments)
    }
}

/// Wrap one transaction set body in a complete single-group interchange.
pub fn wrap_transaction(
    options: EnvelopeOptions,
    delimiters: &Delimiters,
    controls: &mut dyn ControlNumberSource,
    type_code: &str,
    body: Vec<Segment>,
) -> Result<Vec<Segment>> {
    let mut builder = EnvelopeBuilder::new(options, delimiters, controls);
    builder.open_interchange()?;
    builder.open_group()?;
    builder.open_transaction(type_code)?;
    builder.extend(body)?;
    builder.close_transaction()?;
    builder.close_group()?;
    builder.close_interchange()?;
    builder.finish()
}

fn build_isa(
    options: &EnvelopeOptions,
    generated_at: NaiveDateTime,
    control: &str,
    component_separator: char,
) -> Result<Segment> {
    let blank_security = " ".repeat(SECURITY_INFO_LEN);
    Ok(Segment::new("ISA")
        .with_element("00")
        .with_element(blank_security.clone())
        .with_element("00")
        .with_element(blank_security)
        .with_element(pad_fixed("ISA05", &options.sender_qualifier, 2)?)
        .with_element(pad_fixed("ISA06", &options.sender_id, INTERCHANGE_ID_LEN)?)
        .with_element(pad_fixed("ISA07", &options.receiver_qualifier, 2)?)
        .with_element(pad_fixed(
            "ISA08",
            &options.receiver_id,
            INTERCHANGE_ID_LEN,
        )?)
        .with_element(format_short_date(generated_at))
        .with_element(format_time(generated_at))
        .with_element(pad_fixed("ISA11", &options.standards_id, 1)?)
        .with_element(pad_fixed("ISA12", &options.interchange_version, 5)?)
        .with_element(control)
        .with_element(if options.acknowledgment_requested {
            "1"
        } else {
            "0"
        })
        .with_element(options.usage.code())
        .with_element(component_separator.to_string()))
}

fn build_gs(options: &EnvelopeOptions, generated_at: NaiveDateTime, control: &str) -> Segment {
    Segment::new("GS")
        .with_element(options.functional_id.as_str())
        .with_element(options.application_sender())
        .with_element(options.application_receiver())
        .with_element(format_date(generated_at))
        .with_element(format_time(generated_at))
        .with_element(control)
        .with_element(options.responsible_agency.as_str())
        .with_element(options.implementation_version.as_str())
}

/// ISA13: nine digits, zero padded.
fn interchange_control(value: u64) -> Result<String> {
    check_control("ISA13", value)?;
    Ok(format!("{value:09}"))
}

/// GS06: unpadded.
fn group_control(value: u64) -> Result<String> {
    check_control("GS06", value)?;
    Ok(value.to_string())
}

/// ST02: at least four digits, zero padded.
fn transaction_control(value: u64) -> Result<String> {
    check_control("ST02", value)?;
    Ok(format!("{value:04}"))
}

fn check_control(field: &'static str, value: u64) -> Result<()> {
    if value > MAX_CONTROL_NUMBER {
        return Err(X12Error::ControlNumberOverflow { field, value });
    }
    Ok(())
}

/// Space-pad a fixed-width ISA field.
fn pad_fixed(field: &'static str, value: &str, width: usize) -> Result<String> {
    if value.chars().count() > width {
        return Err(X12Error::field_too_long(field, value, width));
    }
    Ok(format!("{value:<width$}"))
}
