use crate::symbol::Symbol;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable view over the input that has not been consumed
/// yet. Consuming never mutates a cursor: [`drop_first`](Cursor::drop_first)
/// returns a new one that is always a suffix of the old one. Because cursors
/// are `Copy`, backtracking is just reusing an earlier value.
pub trait Cursor: Copy + fmt::Debug {
    /// The type of symbols this cursor iterates over
    type Symbol: Symbol;

    /// A borrowed run of symbols from the underlying input
    type Slice: Copy + fmt::Debug + PartialEq;

    /// Get the first remaining symbol, or `None` at the end of input
    fn peek_first(&self) -> Option<Self::Symbol>;

    /// Drop the first `n` symbols
    ///
    /// Dropping past the end yields an empty cursor.
    fn drop_first(self, n: usize) -> Self;

    /// Check whether the remaining input starts with `literal`
    fn has_prefix(&self, literal: &[Self::Symbol]) -> bool;

    /// Borrow the first `k` symbols (fewer if the input is shorter)
    fn take_prefix(&self, k: usize) -> Self::Slice;

    /// Borrow everything that remains
    fn remaining(&self) -> Self::Slice;

    /// Number of symbols that remain
    fn len(&self) -> usize;

    /// Size of the remaining input in its storage units, in constant time
    ///
    /// Strictly decreases whenever at least one symbol is consumed, so two
    /// cursors over the same input are at the same position iff their widths
    /// are equal.
    fn width(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.peek_first().is_none()
    }

    /// Render the upcoming input, truncated to [`SNIPPET_LEN`](crate::failure::SNIPPET_LEN) symbols
    fn snippet(&self) -> String;
}
