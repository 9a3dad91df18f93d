use std::borrow::Cow;

use crate::failure::Failure;
use crate::parser::Parser;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value turns into a failure carrying `message`, and the input
/// the inner parser consumed is given back.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            message,
        }
    }
}

impl<P, F> Parser for Filter<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(P::Output, Self::Cursor), Failure> {
        let (value, next) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(Failure::new(self.message.clone()))
        }
    }
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, message.into())
    }
}

/// Implement FilterExt for all parsers
impl<P> FilterExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::one_of;
    use crate::cursors::StrCursor;
    use crate::fallback::FallbackExt;
    use crate::map::MapExt;

    fn digit() -> impl Parser<Cursor = StrCursor<'static>, Output = u32> {
        one_of("0123456789").map(|ch: char| ch.to_digit(10).unwrap_or(0))
    }

    #[test]
    fn test_filter_accepts() {
        let parser = digit().filter(|n: &u32| n % 2 == 0, "expected an even digit");

        let (value, cursor) = parser.parse(StrCursor::new("42")).unwrap();
        assert_eq!(value, 4);
        assert_eq!(cursor.as_str(), "2");
    }

    #[test]
    fn test_filter_rejects_with_message() {
        let parser = digit().filter(|n: &u32| n % 2 == 0, "expected an even digit");

        let result = parser.parse(StrCursor::new("7"));
        assert_eq!(result.unwrap_err().message(), "expected an even digit");
    }

    #[test]
    fn test_filter_rejection_consumes_nothing() {
        let parser = digit().filter(|n: &u32| *n > 5, "too small").fallback(0);

        let (value, cursor) = parser.parse(StrCursor::new("3x")).unwrap();
        assert_eq!(value, 0);
        assert_eq!(cursor.as_str(), "3x");
    }

    #[test]
    fn test_filter_passes_inner_failure() {
        let parser = digit().filter(|_: &u32| true, "unreachable");

        let result = parser.parse(StrCursor::new("x"));
        assert_eq!(result.unwrap_err().message(), "predicate failed, found `x`");
    }
}
