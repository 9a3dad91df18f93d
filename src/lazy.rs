use crate::failure::Failure;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::BetweenExt;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::cursors::StrCursor;
    use crate::literal::string;
    use crate::many::ZeroOrMoreExt;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::pure::pure;

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| string("a"));

        let (output, cursor) = parser.parse(StrCursor::new("aaaa")).unwrap();
        assert_eq!(output, "a");
        assert_eq!(cursor.as_str(), "aaa");
    }

    #[test]
    fn test_lazy_with_zero_or_more() {
        let parser = lazy(|| string("a").zero_or_more());

        let (output, cursor) = parser.parse(StrCursor::new("aaab")).unwrap();
        assert_eq!(output.len(), 3);
        assert_eq!(cursor.as_str(), "b");
    }

    /// Nesting depth of balanced parentheses
    fn depth<'src>() -> BoxedParser<'src, StrCursor<'src>, usize> {
        lazy(depth)
            .between(string("("), string(")"))
            .map(|inner: usize| inner + 1)
            .or(pure(0))
            .boxed()
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let parser = depth();

        let (value, cursor) = parser.parse(StrCursor::new("((()))x")).unwrap();
        assert_eq!(value, 3);
        assert_eq!(cursor.as_str(), "x");

        // Unbalanced input stops at the outermost level that does match
        let (value, cursor) = parser.parse(StrCursor::new("(()")).unwrap();
        assert_eq!(value, 0);
        assert_eq!(cursor.as_str(), "(()");
    }
}
