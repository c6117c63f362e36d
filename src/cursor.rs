/// Generic cursor trait for the chomp primitives
///
/// A cursor is a position in an immutable sequence. It is `Copy`, so saving
/// a position before an attempt and restoring it afterwards is just keeping
/// the old value around.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element;

    /// Get the element at the current cursor position, or `None` at the end
    fn value(&self) -> Option<Self::Element>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_none()
    }

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'code [Self::Element];

    /// Consume the cursor and return its inner data and position
    fn inner(self) -> (&'code [Self::Element], usize);
}
