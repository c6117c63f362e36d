use crate::byte_cursor::ByteCursor;
use crate::cursor::Cursor;
use crate::error::{ErrorLeaf, ErrorNode};
use crate::parser::Parser;
use std::fmt;
use tracing::trace;

/// Error from a parser wrapped in [`backtrack`]
///
/// Keeps the inner diagnostic but reports no consumed input, so an enclosing
/// `or` is free to try its next alternative from the same position.
#[derive(Debug)]
pub struct BacktrackError<E> {
    start: usize,
    inner: E,
}

impl<E> BacktrackError<E> {
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: fmt::Display> fmt::Display for BacktrackError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<'code, E> ErrorNode<'code> for BacktrackError<E>
where
    E: ErrorNode<'code>,
{
    fn likely_error(&self) -> &dyn ErrorLeaf<'code> {
        self.inner.likely_error()
    }

    fn consumed_until(&self) -> usize {
        self.start
    }
}

/// Parser combinator that rewinds to its starting position when the inner parser fails
pub struct Backtrack<P> {
    parser: P,
}

impl<P> Backtrack<P> {
    pub fn new(parser: P) -> Self {
        Backtrack { parser }
    }
}

impl<'code, P> Parser<'code> for Backtrack<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;
    type Error = BacktrackError<P::Error>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        let start = cursor.position();
        self.parser.parse(cursor).map_err(|inner| {
            let consumed_until = inner.consumed_until();
            if consumed_until > start {
                trace!(start, consumed_until, "backtracking");
            }
            BacktrackError { start, inner }
        })
    }
}

/// Make a failure of `parser` look like it consumed nothing
///
/// ```
/// use addrtok::ByteCursor;
/// use addrtok::and::AndExt;
/// use addrtok::backtrack::backtrack;
/// use addrtok::chomp::literal;
/// use addrtok::map::MapExt;
/// use addrtok::or::OrExt;
/// use addrtok::parser::Parser;
///
/// let ab = literal("a").and(literal("b")).map(|_| "ab");
/// let a = literal("a").map(|()| "a");
///
/// let (matched, _) = backtrack(ab).or(a).parse(ByteCursor::new(b"ac")).unwrap();
/// assert_eq!(matched, "a");
/// ```
pub fn backtrack<'code, P>(parser: P) -> Backtrack<P>
where
    P: Parser<'code>,
{
    Backtrack::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::chomp::literal;
    use crate::map::MapExt;
    use crate::or::OrExt;

    #[test]
    fn test_backtrack_success_passes_through() {
        let parser = backtrack(literal("1").and(literal(".")));

        let (_, cursor) = parser.parse(ByteCursor::new(b"1.2")).unwrap();
        assert_eq!(cursor.value(), Some(b'2'));
    }

    #[test]
    fn test_backtrack_failure_reports_start() {
        let parser = backtrack(literal("1").and(literal(".")));
        let cursor = ByteCursor::at(b"x1/", 1);

        let err = parser.parse(cursor).unwrap_err();
        assert_eq!(err.consumed_until(), 1);
        // The diagnostic still points where the inner parser gave up
        assert_eq!(err.likely_error().loc().position(), 2);
        assert!(err.to_string().contains("expected \".\""));
    }

    #[test]
    fn test_backtrack_enables_fallback_over_shared_prefix() {
        let long = literal("1").and(literal("2")).map(|_| "twelve");
        let short = literal("1").map(|()| "one");

        let (matched, cursor) = backtrack(long).or(short).parse(ByteCursor::new(b"13")).unwrap();
        assert_eq!(matched, "one");
        assert_eq!(cursor.value(), Some(b'3'));
    }

    #[test]
    fn test_backtrack_into_inner() {
        let err = backtrack(literal("/"))
            .parse(ByteCursor::new(b"."))
            .unwrap_err();

        let inner = err.into_inner();
        assert_eq!(inner.loc().position(), 0);
    }
}
