use crate::byte_cursor::ByteCursor;
use crate::error::{ErrorLeaf, ErrorNode};
use crate::parser::Parser;
use std::fmt;

/// Error from either half of an `And` sequence
#[derive(Debug)]
pub enum AndError<E1, E2> {
    First(E1),
    Second(E2),
}

impl<E1: fmt::Display, E2: fmt::Display> fmt::Display for AndError<E1, E2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AndError::First(e) => write!(f, "{}", e),
            AndError::Second(e) => write!(f, "{}", e),
        }
    }
}

impl<'code, E1, E2> ErrorNode<'code> for AndError<E1, E2>
where
    E1: ErrorNode<'code>,
    E2: ErrorNode<'code>,
{
    fn likely_error(&self) -> &dyn ErrorLeaf<'code> {
        match self {
            AndError::First(e) => e.likely_error(),
            AndError::Second(e) => e.likely_error(),
        }
    }

    fn consumed_until(&self) -> usize {
        match self {
            AndError::First(e) => e.consumed_until(),
            AndError::Second(e) => e.consumed_until(),
        }
    }
}

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Chaining `.and()` produces nested tuples like `(((a, b), c), d)`.
///
/// ```
/// use addrtok::ByteCursor;
/// use addrtok::and::AndExt;
/// use addrtok::ascii::{Bounds, bounded_digits};
/// use addrtok::chomp::literal;
/// use addrtok::parser::Parser;
///
/// let ((n, _), rest) = bounded_digits(Bounds::OCTET)
///     .and(literal("."))
///     .parse(ByteCursor::new(b"10.1"))
///     .unwrap();
/// assert_eq!(n, 10);
/// assert_eq!(rest.loc().position(), 3);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);
    type Error = AndError<P1::Error, P2::Error>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        let (result1, cursor) = self.parser1.parse(cursor).map_err(AndError::First)?;
        let (result2, cursor) = self.parser2.parse(cursor).map_err(AndError::Second)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::is_digit;
    use crate::chomp::{ChompIf, chomp_if, literal};
    use crate::cursor::Cursor;

    fn digit() -> ChompIf<fn(u8) -> bool> {
        chomp_if(is_digit as fn(u8) -> bool, "a digit")
    }

    #[test]
    fn test_and_both_succeed() {
        let parser = digit().and(literal("."));

        let ((d, ()), cursor) = parser.parse(ByteCursor::new(b"1.2")).unwrap();
        assert_eq!(d, b'1');
        assert_eq!(cursor.value(), Some(b'2'));
    }

    #[test]
    fn test_and_first_fails() {
        let err = digit()
            .and(literal("."))
            .parse(ByteCursor::new(b"x."))
            .unwrap_err();

        assert!(matches!(err, AndError::First(_)));
        assert_eq!(err.consumed_until(), 0);
    }

    #[test]
    fn test_and_second_fails_after_consuming() {
        let err = digit()
            .and(literal("."))
            .parse(ByteCursor::new(b"1/"))
            .unwrap_err();

        assert!(matches!(err, AndError::Second(_)));
        assert_eq!(err.consumed_until(), 1);
        assert_eq!(err.likely_error().loc().position(), 1);
    }

    #[test]
    fn test_and_chain() {
        let parser = digit().and(literal(".")).and(digit());

        let (((a, ()), b), cursor) = parser.parse(ByteCursor::new(b"4.2")).unwrap();
        assert_eq!(a, b'4');
        assert_eq!(b, b'2');
        assert!(matches!(cursor, ByteCursor::EndOfFile { .. }));
    }

    #[test]
    fn test_and_function_syntax() {
        let parser = and(literal("/"), digit());

        let (((), d), _) = parser.parse(ByteCursor::new(b"/8")).unwrap();
        assert_eq!(d, b'8');
    }
}
