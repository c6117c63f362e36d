use crate::byte_cursor::ByteCursor;
use crate::error::ErrorNode;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;
    type Error: ErrorNode<'code>;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. The caller keeps the cursor it passed in,
    /// so a failure never moves it.
    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error>;
}
