use std::fmt::Debug;

use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that applies the given parser exactly `count` times
///
/// All or nothing: if fewer than `count` applications succeed the whole
/// parser fails, reporting how many items were consumed, their values and
/// the input that stopped it. Nothing is consumed on failure. `count == 0`
/// succeeds with an empty vector without looking at the input.
pub struct Repeated<P> {
    parser: P,
    count: usize,
}

impl<P> Repeated<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Repeated { parser, count }
    }
}

impl<P> Parser for Repeated<P>
where
    P: Parser,
    P::Output: Debug,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let mut results = Vec::with_capacity(self.count);

        while results.len() < self.count {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(_) => {
                    return Err(Failure::count_mismatch(
                        self.count,
                        results.len(),
                        &format!("{:?}", results),
                        &cursor.snippet(),
                    ));
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Repeated parser
pub fn repeated<P>(parser: P, count: usize) -> Repeated<P>
where
    P: Parser,
{
    Repeated::new(parser, count)
}

/// Extension trait to add .repeated() and .once() method support for parsers
pub trait RepeatedExt: Parser + Sized {
    fn repeated(self, count: usize) -> Repeated<Self> {
        Repeated::new(self, count)
    }

    /// Shorthand for `repeated(1)`
    fn once(self) -> Repeated<Self> {
        Repeated::new(self, 1)
    }
}

/// Implement RepeatedExt for all parsers
impl<P> RepeatedExt for P where P: Parser {}
