use crate::byte_cursor::ByteCursor;
use crate::cursor::Cursor;
use crate::error::{ErrorNode, ParseError};
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that turns failure of the inner parser into `None`
///
/// Always succeeds. On failure the cursor is left exactly where it was, even
/// if the inner parser got part of the way through, so the wrapper is its own
/// backtracking boundary.
///
/// ```
/// use addrtok::ByteCursor;
/// use addrtok::and::AndExt;
/// use addrtok::chomp::literal;
/// use addrtok::optional::optional;
/// use addrtok::parser::Parser;
///
/// let slash_eight = literal("/").and(literal("8"));
///
/// let (found, rest) = optional(slash_eight).parse(ByteCursor::new(b"/9")).unwrap();
/// assert!(found.is_none());
/// assert_eq!(rest.loc().position(), 0);
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;
    // Never produced
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(e) => {
                trace!(
                    start = cursor.position(),
                    consumed_until = e.consumed_until(),
                    "optional parser absent"
                );
                Ok((None, cursor))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}
