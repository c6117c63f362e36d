use crate::cursor::Cursor;
use crate::error::CodeLoc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ByteCursor<'code> {
    /// Cursor pointing at a valid byte position
    Valid {
        data: &'code [u8],
        /// Byte position in the data slice (0-based index)
        position: usize,
    },
    /// Cursor past the last byte
    EndOfFile { data: &'code [u8] },
}

impl<'code> ByteCursor<'code> {
    pub fn new(data: &'code [u8]) -> Self {
        Self::at(data, 0)
    }

    /// Cursor at an arbitrary position; anything at or past the end is `EndOfFile`
    pub fn at(data: &'code [u8], position: usize) -> Self {
        if position >= data.len() {
            return ByteCursor::EndOfFile { data };
        }
        ByteCursor::Valid { data, position }
    }

    /// The location of this cursor, for diagnostics
    pub fn loc(&self) -> CodeLoc<'code> {
        let (data, position) = self.inner();
        CodeLoc::new(data, position)
    }
}

impl<'code> Cursor<'code> for ByteCursor<'code> {
    type Element = u8;

    fn value(&self) -> Option<Self::Element> {
        match self {
            ByteCursor::Valid { data, position } => data.get(*position).copied(),
            ByteCursor::EndOfFile { .. } => None,
        }
    }

    fn next(self) -> Self {
        match self {
            ByteCursor::Valid { data, position } => ByteCursor::at(data, position + 1),
            ByteCursor::EndOfFile { data } => ByteCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            ByteCursor::Valid { position, .. } => *position,
            ByteCursor::EndOfFile { data } => data.len(),
        }
    }

    fn source(&self) -> &'code [Self::Element] {
        match self {
            ByteCursor::Valid { data, .. } => data,
            ByteCursor::EndOfFile { data } => data,
        }
    }

    fn inner(self) -> (&'code [Self::Element], usize) {
        match self {
            ByteCursor::Valid { data, position } => (data, position),
            ByteCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}
