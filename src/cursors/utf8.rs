use crate::cursor::Cursor;
use crate::failure::SNIPPET_LEN;

/// Cursor over UTF-8 text, one `char` per symbol
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'src> {
    rest: &'src str,
}

impl<'src> StrCursor<'src> {
    pub fn new(input: &'src str) -> Self {
        StrCursor { rest: input }
    }

    pub fn as_str(&self) -> &'src str {
        self.rest
    }

    /// Byte offset of the `n`th character, or the end of the text
    fn byte_offset(&self, n: usize) -> usize {
        self.rest
            .char_indices()
            .nth(n)
            .map_or(self.rest.len(), |(offset, _)| offset)
    }
}

impl<'src> From<&'src str> for StrCursor<'src> {
    fn from(input: &'src str) -> Self {
        StrCursor::new(input)
    }
}

impl<'src> Cursor for StrCursor<'src> {
    type Symbol = char;
    type Slice = &'src str;

    fn peek_first(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn drop_first(self, n: usize) -> Self {
        StrCursor {
            rest: &self.rest[self.byte_offset(n)..],
        }
    }

    fn has_prefix(&self, literal: &[char]) -> bool {
        let mut chars = self.rest.chars();
        literal
            .iter()
            .all(|&expected| chars.next() == Some(expected))
    }

    fn take_prefix(&self, k: usize) -> &'src str {
        &self.rest[..self.byte_offset(k)]
    }

    fn remaining(&self) -> &'src str {
        self.rest
    }

    fn len(&self) -> usize {
        self.rest.chars().count()
    }

    fn width(&self) -> usize {
        self.rest.len()
    }

    fn snippet(&self) -> String {
        self.take_prefix(SNIPPET_LEN).to_string()
    }
}
