//! X12 text writer.
//!
//! Renders a segment sequence with the configured separators. Data values are
//! written as-is: a value containing an active separator produces a document
//! the receiver will split in the wrong place. [`DelimiterPolicy::Reject`]
//! turns that into an error instead.

use std::io::{BufWriter, Write};

use crate::delimiters::{DelimiterPolicy, Delimiters};
use crate::error::{Result, X12Error};
use crate::segment::{Element, Segment};

/// X12 writer over any byte sink.
pub struct X12Writer<W: Write> {
    writer: BufWriter<W>,
    delimiters: Delimiters,
    policy: DelimiterPolicy,
}

impl<W: Write> X12Writer<W> {
    /// Create a writer with default separators.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            delimiters: Delimiters::default(),
            policy: DelimiterPolicy::default(),
        }
    }

    /// Create a writer with the given separators.
    pub fn with_delimiters(writer: W, delimiters: Delimiters) -> Self {
        Self {
            writer: BufWriter::new(writer),
            delimiters,
            policy: DelimiterPolicy::default(),
        }
    }

    /// Set the delimiter collision policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DelimiterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Write every segment and flush. Returns the number of segments written.
    pub fn write_segments(mut self, segments: &[Segment]) -> Result<usize> {
        self.delimiters.validate()?;
        if self.policy == DelimiterPolicy::Reject {
            for segment in segments {
                check_collisions(segment, &self.delimiters)?;
            }
        }
        for segment in segments {
            self.write_segment(segment)?;
        }
        self.writer.flush()?;
        Ok(segments.len())
    }

    fn write_segment(&mut self, segment: &Segment) -> Result<()> {
        let element_sep = self.delimiters.element.to_string();
        let component_sep = self.delimiters.component.to_string();
        let terminator = self.delimiters.segment.to_string();

        self.writer.write_all(segment.tag().as_bytes())?;
        for element in segment.elements() {
            self.writer.write_all(element_sep.as_bytes())?;
            match element {
                Element::Simple(value) => self.writer.write_all(value.as_bytes())?,
                Element::Composite(parts) => {
                    self.writer
                        .write_all(parts.join(&component_sep).as_bytes())?;
                }
            }
        }
        self.writer.write_all(terminator.as_bytes())?;
        if self.delimiters.line_break {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Render segments to a string.
pub fn to_x12_string(
    segments: &[Segment],
    delimiters: &Delimiters,
    policy: DelimiterPolicy,
) -> Result<String> {
    let mut buffer = Vec::new();
    X12Writer::with_delimiters(&mut buffer, *delimiters)
        .with_policy(policy)
        .write_segments(segments)?;
    String::from_utf8(buffer).map_err(|e| X12Error::Io(std::io::Error::other(e)))
}

/// Fail on the first data value that contains an active separator.
fn check_collisions(segment: &Segment, delimiters: &Delimiters) -> Result<()> {
    for (index, element) in segment.elements().iter().enumerate() {
        let position = index + 1;
        // ISA16 carries the component separator itself.
        if segment.tag() == "ISA" && position == 16 {
            continue;
        }
        for part in element.parts() {
            if let Some(delimiter) = delimiters.find_in(part) {
                return Err(X12Error::delimiter_collision(
                    segment.tag(),
                    position,
                    delimiter,
                ));
            }
        }
    }
    Ok(())
}
