//! Segment and element representation.
//!
//! A segment is a tag followed by ordered elements. Elements are either a
//! single value or a composite of sub-elements. Empty values are allowed and
//! mark skipped or trailing optional positions; nothing here inspects content.

/// One element of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Simple(String),
    Composite(Vec<String>),
}

impl Element {
    /// Create a simple element.
    pub fn simple(value: impl Into<String>) -> Self {
        Self::Simple(value.into())
    }

    /// Create a composite element from its sub-elements.
    pub fn composite<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(parts.into_iter().map(Into::into).collect())
    }

    /// Create an empty placeholder element.
    pub fn empty() -> Self {
        Self::Simple(String::new())
    }

    /// True when the element carries no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Simple(value) => value.is_empty(),
            Self::Composite(parts) => parts.iter().all(String::is_empty),
        }
    }

    /// Value of a simple element.
    pub fn as_simple(&self) -> Option<&str> {
        match self {
            Self::Simple(value) => Some(value),
            Self::Composite(_) => None,
        }
    }

    /// Sub-elements of a composite (a simple element is a single part).
    pub fn parts(&self) -> Vec<&str> {
        match self {
            Self::Simple(value) => vec![value.as_str()],
            Self::Composite(parts) => parts.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Simple(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Simple(value)
    }
}

impl From<&String> for Element {
    fn from(value: &String) -> Self {
        Self::Simple(value.clone())
    }
}

/// A single X12 segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    tag: String,
    elements: Vec<Element>,
}

impl Segment {
    /// Create a segment with no elements.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            elements: Vec::new(),
        }
    }

    /// Create a segment from a tag and ordered elements.
    pub fn with_elements<I, E>(tag: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self {
            tag: tag.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a simple element.
    #[must_use]
    pub fn with_element(mut self, value: impl Into<String>) -> Self {
        self.elements.push(Element::Simple(value.into()));
        self
    }

    /// Append `count` empty elements.
    #[must_use]
    pub fn with_empty(mut self, count: usize) -> Self {
        self.elements
            .extend(std::iter::repeat_with(Element::empty).take(count));
        self
    }

    /// Append a composite element.
    #[must_use]
    pub fn with_composite<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.push(Element::composite(parts));
        self
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Element at a 1-based position (`N102` is `element(2)` of `N1`).
    pub fn element(&self, position: usize) -> Option<&Element> {
        position
            .checked_sub(1)
            .and_then(|index| self.elements.get(index))
    }

    /// Value of the simple element at a 1-based position.
    pub fn value(&self, position: usize) -> Option<&str> {
        self.element(position).and_then(Element::as_simple)
    }

    /// Number of elements, including empty placeholders.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order_and_empties() {
        let segment = Segment::new("CLP")
            .with_element("CLAIM001")
            .with_element("1")
            .with_empty(1)
            .with_element("12");

        assert_eq!(segment.tag(), "CLP");
        assert_eq!(segment.len(), 4);
        assert_eq!(segment.value(1), Some("CLAIM001"));
        assert_eq!(segment.value(3), Some(""));
        assert_eq!(segment.value(4), Some("12"));
        assert_eq!(segment.value(5), None);
    }

    #[test]
    fn test_positions_are_one_based() {
        let segment = Segment::with_elements("TRN", ["1", "CHK1", "PAYER"]);
        assert!(segment.element(0).is_none());
        assert_eq!(segment.value(2), Some("CHK1"));
    }

    #[test]
    fn test_composite_element() {
        let segment = Segment::new("SVC").with_composite(["HC", "99214"]);
        let element = segment.element(1).unwrap();
        assert_eq!(element.as_simple(), None);
        assert_eq!(element.parts(), vec!["HC", "99214"]);
        assert!(!element.is_empty());
        assert!(Element::composite(["", ""]).is_empty());
    }
}
