use crate::byte_cursor::ByteCursor;
use crate::cursor::Cursor;
use crate::error::{ErrorLeaf, ErrorNode};
use crate::parser::Parser;
use std::fmt;
use tracing::trace;

/// Error from an `Or` parser
#[derive(Debug)]
pub enum OrError<E1, E2> {
    /// The first parser consumed input before failing, so the second was never tried
    Committed(E1),
    /// Both alternatives failed
    Both {
        first: E1,
        second: E2,
        /// Whether the second alternative progressed further than the first
        second_further: bool,
    },
}

impl<'code, E1, E2> OrError<E1, E2>
where
    E1: ErrorNode<'code>,
    E2: ErrorNode<'code>,
{
    fn both(first: E1, second: E2) -> Self {
        let second_further =
            second.likely_error().loc().position() > first.likely_error().loc().position();
        OrError::Both {
            first,
            second,
            second_further,
        }
    }

    /// The leaf error that progressed furthest into the input
    ///
    /// Ties go to the first alternative.
    pub fn furthest(&self) -> &dyn ErrorLeaf<'code> {
        match self {
            OrError::Committed(e) => e.likely_error(),
            OrError::Both {
                second,
                second_further: true,
                ..
            } => second.likely_error(),
            OrError::Both { first, .. } => first.likely_error(),
        }
    }
}

impl<E1: fmt::Display, E2: fmt::Display> fmt::Display for OrError<E1, E2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrError::Committed(e) => write!(f, "{}", e),
            OrError::Both {
                second,
                second_further: true,
                ..
            } => write!(f, "{}", second),
            OrError::Both { first, .. } => write!(f, "{}", first),
        }
    }
}

impl<'code, E1, E2> ErrorNode<'code> for OrError<E1, E2>
where
    E1: ErrorNode<'code>,
    E2: ErrorNode<'code>,
{
    fn likely_error(&self) -> &dyn ErrorLeaf<'code> {
        self.furthest()
    }

    fn consumed_until(&self) -> usize {
        match self {
            OrError::Committed(e) => e.consumed_until(),
            // The first alternative did not consume, so progress is whatever the second made
            OrError::Both { second, .. } => second.consumed_until(),
        }
    }
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser only runs when the first failed without consuming input.
/// Wrap the first parser in [`backtrack`](crate::backtrack::backtrack) to allow
/// falling back after it has consumed a shared prefix.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;
    type Error = OrError<P1::Error, P2::Error>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        let start = cursor.position();
        if first.consumed_until() > start {
            return Err(OrError::Committed(first));
        }

        trace!(
            start,
            failed_at = first.likely_error().loc().position(),
            "first alternative failed, trying second"
        );
        self.parser2
            .parse(cursor)
            .map_err(|second| OrError::both(first, second))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
