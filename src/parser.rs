use crate::cursor::Cursor;
use crate::failure::Failure;
use std::marker::PhantomData;

/// Core parser trait for parser combinators
pub trait Parser {
    type Cursor: Cursor;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the remaining cursor on success. The
    /// remaining cursor is always a suffix of `cursor`. Parsing is pure:
    /// the same parser on the same cursor always gives the same result.
    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        (**self).parse(cursor)
    }
}

/// Parser backed by a plain function from cursor to result
pub struct FnParser<C, F> {
    function: F,
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C, F, O> Parser for FnParser<C, F>
where
    C: Cursor,
    F: Fn(C) -> Result<(O, C), Failure>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> Result<(O, C), Failure> {
        (self.function)(cursor)
    }
}

/// Wrap a function as a parser
pub fn from_fn<C, F, O>(function: F) -> FnParser<C, F>
where
    C: Cursor,
    F: Fn(C) -> Result<(O, C), Failure>,
{
    FnParser {
        function,
        _cursor: PhantomData,
    }
}
