//! ANSI X12 segment model, envelope builder and serializer.
//!
//! This crate knows the X12 grammar (segments, elements, separators and the
//! ISA/GS/ST envelope) but nothing about any particular transaction set.
//!
//! # Features
//!
//! - Simple and composite elements, empty positions preserved
//! - Interchange / functional group / transaction set state machine with
//!   builder-computed counts and control numbers
//! - Pluggable control-number sources
//! - Configurable separators with an optional collision check
//!
//! # Example
//!
//! ```
//! use remit_x12::{
//!     DelimiterPolicy, Delimiters, EnvelopeOptions, FixedControlNumbers, Segment,
//!     to_x12_string, wrap_transaction,
//! };
//!
//! let mut controls = FixedControlNumbers::new(1, 1, 1);
//! let options = EnvelopeOptions::new().with_sender("PAYER").with_receiver("PAYEE");
//! let delimiters = Delimiters::default();
//! let body = vec![Segment::with_elements("TRN", ["1", "CHK1", "PAYER"])];
//!
//! let segments = wrap_transaction(options, &delimiters, &mut controls, "835", body).unwrap();
//! let text = to_x12_string(&segments, &delimiters, DelimiterPolicy::PassThrough).unwrap();
//! assert!(text.starts_with("ISA*00*"));
//! assert!(text.ends_with("IEA*1*000000001~"));
//! ```

mod control;
mod delimiters;
pub mod envelope;
mod error;
mod options;
mod segment;
mod writer;

pub use control::{ControlNumberSource, FixedControlNumbers, SequentialControlNumbers};
pub use delimiters::{DelimiterPolicy, Delimiters};
pub use envelope::{EnvelopeBuilder, MAX_CONTROL_NUMBER, wrap_transaction};
pub use error::{Result, X12Error};
pub use options::{EnvelopeOptions, UsageIndicator, format_date, format_short_date, format_time};
pub use segment::{Element, Segment};
pub use writer::{X12Writer, to_x12_string};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
