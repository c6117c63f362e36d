use std::borrow::Cow;

/// A region of the input consumed by a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source
    pub source: &'code [u8],
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code [u8], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes this span covers
    pub fn slice(&self) -> &'code [u8] {
        &self.source[self.start..self.end]
    }

    pub fn as_str(&self) -> Cow<'code, str> {
        String::from_utf8_lossy(self.slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let data = b"2293487";
        let span = Span::new(data, 0, 7);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
        assert_eq!(span.slice(), b"2293487");
        assert_eq!(span.as_str(), "2293487");
    }

    #[test]
    fn test_span_empty() {
        let span = Span::new(b"abc", 3, 3);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.as_str(), "");
    }

    #[test]
    fn test_span_middle() {
        let span = Span::new(b"10.128", 3, 6);
        assert_eq!(span.as_str(), "128");
    }
}
