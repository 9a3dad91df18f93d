use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that succeeds only when no input remains
///
/// This is useful for top-level parsers that must account for the whole input.
pub struct EndOfInput<C> {
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C: Cursor> Parser for EndOfInput<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: C) -> Result<((), C), Failure> {
        if cursor.is_empty() {
            Ok(((), cursor))
        } else {
            Err(Failure::new(format!(
                "expected end of input but found `{}`",
                cursor.snippet()
            )))
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<C>() -> EndOfInput<C> {
    EndOfInput {
        _cursor: PhantomData,
    }
}
