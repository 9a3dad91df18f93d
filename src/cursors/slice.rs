use crate::cursor::Cursor;
use crate::failure::SNIPPET_LEN;
use crate::symbol::Symbol;

/// Cursor over a slice of arbitrary symbols, such as bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SliceCursor<'src, T: Symbol> {
    rest: &'src [T],
}

impl<'src, T: Symbol> SliceCursor<'src, T> {
    pub fn new(input: &'src [T]) -> Self {
        SliceCursor { rest: input }
    }

    pub fn as_slice(&self) -> &'src [T] {
        self.rest
    }
}

impl<'src, T: Symbol> From<&'src [T]> for SliceCursor<'src, T> {
    fn from(input: &'src [T]) -> Self {
        SliceCursor::new(input)
    }
}

impl<'src, T: Symbol> Cursor for SliceCursor<'src, T> {
    type Symbol = T;
    type Slice = &'src [T];

    fn peek_first(&self) -> Option<T> {
        self.rest.first().copied()
    }

    fn drop_first(self, n: usize) -> Self {
        SliceCursor {
            rest: &self.rest[n.min(self.rest.len())..],
        }
    }

    fn has_prefix(&self, literal: &[T]) -> bool {
        self.rest.starts_with(literal)
    }

    fn take_prefix(&self, k: usize) -> &'src [T] {
        &self.rest[..k.min(self.rest.len())]
    }

    fn remaining(&self) -> &'src [T] {
        self.rest
    }

    fn len(&self) -> usize {
        self.rest.len()
    }

    fn width(&self) -> usize {
        self.rest.len()
    }

    fn snippet(&self) -> String {
        T::render(self.take_prefix(SNIPPET_LEN))
    }
}
