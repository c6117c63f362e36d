//! Cursor-level primitives every grammar in this crate is built from.
//!
//! None of them move the caller's cursor on failure; errors are reported at the
//! position the primitive started from.

use crate::byte_cursor::ByteCursor;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use std::borrow::Cow;

/// Render a byte for diagnostics
fn describe(byte: u8) -> String {
    match std::str::from_utf8(&[byte]) {
        Ok(s) => format!("'{}'", s.escape_default()),
        Err(_) => format!("0x{:02X}", byte),
    }
}

/// Parser that consumes zero or more bytes satisfying a predicate
pub struct ChompWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for ChompWhile<F>
where
    F: Fn(u8) -> bool,
{
    type Output = Span<'code>;
    type Error = ParseError<'code>;

    fn parse(
        &self,
        mut cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        let start = cursor.position();
        while let Some(byte) = cursor.value() {
            if !(self.predicate)(byte) {
                break;
            }
            cursor = cursor.next();
        }

        let span = Span::new(cursor.source(), start, cursor.position());
        Ok((span, cursor))
    }
}

/// Consume bytes while `predicate` holds. Never fails, possibly consuming nothing.
///
/// ```
/// use addrtok::ByteCursor;
/// use addrtok::chomp::chomp_while;
/// use addrtok::parser::Parser;
///
/// let (span, rest) = chomp_while(|b| b.is_ascii_digit())
///     .parse(ByteCursor::new(b"10a"))
///     .unwrap();
/// assert_eq!(span.as_str(), "10");
/// assert_eq!(rest.loc().position(), 2);
/// ```
pub fn chomp_while<F>(predicate: F) -> ChompWhile<F>
where
    F: Fn(u8) -> bool,
{
    ChompWhile { predicate }
}

/// Parser that consumes exactly one byte satisfying a predicate
pub struct ChompIf<F> {
    predicate: F,
    expected: Cow<'static, str>,
}

impl<'code, F> Parser<'code> for ChompIf<F>
where
    F: Fn(u8) -> bool,
{
    type Output = u8;
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        match cursor.value() {
            Some(byte) if (self.predicate)(byte) => Ok((byte, cursor.next())),
            Some(byte) => Err(ParseError::SyntaxError {
                message: format!("expected {}, found {}", self.expected, describe(byte)).into(),
                loc: cursor.loc(),
            }),
            None => Err(ParseError::UnexpectedEndOfInput {
                expected: self.expected.clone(),
                loc: cursor.loc(),
            }),
        }
    }
}

/// Consume a single byte if it satisfies `predicate`
///
/// `expected` describes the accepted bytes in diagnostics.
pub fn chomp_if<F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> ChompIf<F>
where
    F: Fn(u8) -> bool,
{
    ChompIf {
        predicate,
        expected: expected.into(),
    }
}

/// Parser that matches an exact byte sequence
pub struct Literal {
    text: Cow<'static, str>,
}

impl<'code> Parser<'code> for Literal {
    type Output = ();
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        let mut current = cursor;

        for &expected in self.text.as_bytes() {
            match current.value() {
                Some(byte) if byte == expected => current = current.next(),
                Some(byte) => {
                    return Err(ParseError::SyntaxError {
                        message: format!(
                            "expected {:?}, found {} at byte {}",
                            self.text,
                            describe(byte),
                            current.position()
                        )
                        .into(),
                        loc: cursor.loc(),
                    });
                }
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        expected: format!("{:?}", self.text).into(),
                        loc: cursor.loc(),
                    });
                }
            }
        }

        Ok(((), current))
    }
}

/// Match `text` exactly, or fail at the starting position
pub fn literal(text: impl Into<Cow<'static, str>>) -> Literal {
    Literal { text: text.into() }
}

/// Parser that succeeds only at the end of input
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::TrailingInput { loc: cursor.loc() })
        }
    }
}

pub fn end() -> End {
    End
}
