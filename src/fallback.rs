use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that substitutes a default value when the inner parser fails
///
/// Never fails. On failure the default is returned and no input is consumed.
pub struct Fallback<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Fallback<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        Fallback { parser, default }
    }
}

impl<P, T> Parser for Fallback<P, T>
where
    P: Parser<Output = T>,
    T: Clone,
{
    type Cursor = P::Cursor;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(T, Self::Cursor), Failure> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Extension trait to add .fallback() method support for parsers
pub trait FallbackExt: Parser + Sized {
    fn fallback(self, default: Self::Output) -> Fallback<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Fallback::new(self, default)
    }
}

/// Implement FallbackExt for all parsers
impl<P> FallbackExt for P where P: Parser {}
