//! Separator configuration.

use crate::error::{Result, X12Error};

/// The three X12 separators plus an optional line break after each segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Element separator (default `*`).
    pub element: char,
    /// Component (sub-element) separator (default `:`), also written to ISA16.
    pub component: char,
    /// Segment terminator (default `~`).
    pub segment: char,
    /// Write `\n` after every segment terminator (default: false).
    pub line_break: bool,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            element: '*',
            component: ':',
            segment: '~',
            line_break: false,
        }
    }
}

impl Delimiters {
    /// Create a validated separator set without line breaks.
    pub fn new(element: char, component: char, segment: char) -> Result<Self> {
        let delimiters = Self {
            element,
            component,
            segment,
            line_break: false,
        };
        delimiters.validate()?;
        Ok(delimiters)
    }

    /// Enable or disable the line break after each segment.
    #[must_use]
    pub fn with_line_breaks(mut self, enable: bool) -> Self {
        self.line_break = enable;
        self
    }

    /// Check that the separators are distinct and cannot be confused with data.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("element", self.element),
            ("component", self.component),
            ("segment", self.segment),
        ];
        for (name, ch) in named {
            if ch.is_alphanumeric() {
                return Err(X12Error::invalid_delimiters(format!(
                    "{name} separator '{ch}' is alphanumeric"
                )));
            }
            if ch == ' ' {
                return Err(X12Error::invalid_delimiters(format!(
                    "{name} separator cannot be a space"
                )));
            }
        }
        if self.element == self.component
            || self.element == self.segment
            || self.component == self.segment
        {
            return Err(X12Error::invalid_delimiters(
                "element, component and segment separators must differ",
            ));
        }
        Ok(())
    }

    /// Return the first active separator found in `value`.
    pub fn find_in(&self, value: &str) -> Option<char> {
        value
            .chars()
            .find(|&ch| ch == self.element || ch == self.component || ch == self.segment)
    }
}

/// What to do when a data value contains an active separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterPolicy {
    /// Emit the value unchanged (the document may become unparseable).
    #[default]
    PassThrough,
    /// Fail with [`X12Error::DelimiterCollision`].
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters_are_valid() {
        let delimiters = Delimiters::default();
        assert!(delimiters.validate().is_ok());
        assert_eq!(delimiters.element, '*');
        assert_eq!(delimiters.component, ':');
        assert_eq!(delimiters.segment, '~');
    }

    #[test]
    fn test_newline_terminator_is_allowed() {
        let delimiters = Delimiters::new('*', ':', '\n').unwrap();
        assert_eq!(delimiters.segment, '\n');
    }

    #[test]
    fn test_rejects_duplicate_separators() {
        assert!(Delimiters::new('*', '*', '~').is_err());
        assert!(Delimiters::new('*', ':', ':').is_err());
    }

    #[test]
    fn test_rejects_alphanumeric_and_space() {
        assert!(Delimiters::new('A', ':', '~').is_err());
        assert!(Delimiters::new('*', ' ', '~').is_err());
    }

    #[test]
    fn test_find_in() {
        let delimiters = Delimiters::default();
        assert_eq!(delimiters.find_in("ACME*HEALTH"), Some('*'));
        assert_eq!(delimiters.find_in("HC:99214"), Some(':'));
        assert_eq!(delimiters.find_in("Memorial Hospital"), None);
    }
}
