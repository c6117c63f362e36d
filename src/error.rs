use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Trait for errors that can report their location in the input
pub trait ErrorLeaf<'code>: Error {
    /// Returns the location where this error occurred
    fn loc(&self) -> CodeLoc<'code>;
}

/// Trait for (possibly nested) combinator errors
///
/// Combinators wrap the errors of the parsers they are built from. `likely_error`
/// flattens that structure down to the leaf that made it furthest into the input,
/// and `consumed_until` tells an enclosing `or` how far the failing parser got
/// before it gave up, which decides whether the failure is committed.
pub trait ErrorNode<'code>: fmt::Display + fmt::Debug {
    /// Flatten nested error structures and return the likely error that made it furthest
    fn likely_error(&self) -> &dyn ErrorLeaf<'code>;

    /// Position up to which input was consumed before the failure
    ///
    /// Equal to the starting position when nothing was consumed.
    fn consumed_until(&self) -> usize {
        self.likely_error().loc().position()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code [u8],
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code [u8], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// The unconsumed input from this location onwards
    pub fn remainder(&self) -> Cow<'code, str> {
        let start = self.loc.min(self.code.len());
        String::from_utf8_lossy(&self.code[start..])
    }

    /// Line number and byte offset within that line
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &byte) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc.saturating_sub(line_start),
        }
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(f, "line {}, byte offset {}", pos.line, pos.byte_offset)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError<'code> {
    #[error("expected {expected} at {loc}, found end of input")]
    UnexpectedEndOfInput {
        expected: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    #[error("syntax error at {loc}: {message}")]
    SyntaxError {
        message: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    /// A digit field whose length falls outside its bounds
    #[error("digit run of length {observed} at {loc} is outside the allowed range {min}..={max}")]
    OutOfRange {
        observed: usize,
        min: usize,
        max: usize,
        loc: CodeLoc<'code>,
    },
    #[error("number too large at {loc}: {digits}")]
    NumberTooLarge { digits: String, loc: CodeLoc<'code> },
    #[error("expected end of input at {loc}, found {rest:?}", rest = .loc.remainder())]
    TrailingInput { loc: CodeLoc<'code> },
}

impl<'code> ErrorLeaf<'code> for ParseError<'code> {
    fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::UnexpectedEndOfInput { loc, .. } => *loc,
            ParseError::SyntaxError { loc, .. } => *loc,
            ParseError::OutOfRange { loc, .. } => *loc,
            ParseError::NumberTooLarge { loc, .. } => *loc,
            ParseError::TrailingInput { loc } => *loc,
        }
    }
}

impl<'code> ErrorNode<'code> for ParseError<'code> {
    fn likely_error(&self) -> &dyn ErrorLeaf<'code> {
        self
    }
}

/// Owned diagnostic returned by the classification entry points
///
/// The message is meant for humans. Its wording is not stable and should not be
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClassifyError {
    message: String,
    position: usize,
}

impl ClassifyError {
    pub fn from_node<'code>(error: &impl ErrorNode<'code>) -> Self {
        let leaf = error.likely_error();
        Self {
            message: leaf.to_string(),
            position: leaf.loc().position(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the failure in the classified input
    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeloc_empty_data() {
        let loc = CodeLoc::new(b"", 0);
        let error = ParseError::TrailingInput { loc };

        let display_str = error.to_string();
        assert!(display_str.contains("expected end of input"));
        assert_eq!(loc.position(), 0);
        assert_eq!(loc.remainder(), "");
    }

    #[test]
    fn test_codeloc_remainder() {
        let loc = CodeLoc::new(b"10a.2bc", 2);
        assert_eq!(loc.remainder(), "a.2bc");

        // Past the end never panics
        let loc = CodeLoc::new(b"10", 5);
        assert_eq!(loc.remainder(), "");
    }

    #[test]
    fn test_codeloc_readable_position() {
        let loc = CodeLoc::new(b"line1\nline2", 11);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_out_of_range_display() {
        let error = ParseError::OutOfRange {
            observed: 4,
            min: 1,
            max: 3,
            loc: CodeLoc::new(b"1234.1.1.1", 0),
        };

        let display_str = error.to_string();
        assert!(display_str.contains("length 4"));
        assert!(display_str.contains("1..=3"));
        assert!(display_str.contains("byte offset 0"));
    }

    #[test]
    fn test_trailing_input_display() {
        let error = ParseError::TrailingInput {
            loc: CodeLoc::new(b"10a.2bc", 2),
        };

        assert_eq!(
            error.to_string(),
            "expected end of input at line 1, byte offset 2, found \"a.2bc\""
        );
    }

    #[test]
    fn test_leaf_is_its_own_likely_error() {
        let error = ParseError::SyntaxError {
            message: "expected '.'".into(),
            loc: CodeLoc::new(b"10/", 2),
        };

        assert_eq!(error.likely_error().loc().position(), 2);
        assert_eq!(error.consumed_until(), 2);
    }

    #[test]
    fn test_classify_error_from_node() {
        let error = ParseError::TrailingInput {
            loc: CodeLoc::new(b"42x", 2),
        };
        let owned = ClassifyError::from_node(&error);

        assert_eq!(owned.position(), 2);
        assert_eq!(owned.message(), error.to_string());
        assert_eq!(owned.to_string(), owned.message());
    }
}
