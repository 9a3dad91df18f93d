use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that chooses the next parser from the value of the previous one
///
/// This is monadic bind: `f` receives the parsed value and returns a new parser,
/// which then runs on the remaining input. It is what makes context-sensitive
/// grammars expressible, e.g. a length prefix deciding how many items follow.
///
/// Grammars that recurse through `flat_map` use stack proportional to the
/// nesting depth of the input they parse.
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<P, F, Q> Parser for FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Q::Output, Self::Cursor), Failure> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt: Parser + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<Cursor = Self::Cursor>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<P> FlatMapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::one_of;
    use crate::cursors::StrCursor;
    use crate::literal::string;
    use crate::repeated::RepeatedExt;

    #[test]
    fn test_length_prefixed_items() {
        // A digit says how many 'x' follow
        let parser = one_of("0123456789").flat_map(|count: char| {
            let count = count.to_digit(10).map_or(0, |n| n as usize);
            string("x").repeated(count)
        });

        let (items, cursor) = parser.parse(StrCursor::new("3xxxy")).unwrap();
        assert_eq!(items, vec!["x", "x", "x"]);
        assert_eq!(cursor.as_str(), "y");
    }

    #[test]
    fn test_second_stage_failure_propagates() {
        let parser = one_of("0123456789").flat_map(|count: char| {
            let count = count.to_digit(10).map_or(0, |n| n as usize);
            string("x").repeated(count)
        });

        let result = parser.parse(StrCursor::new("3xxy"));
        assert!(
            result
                .unwrap_err()
                .message()
                .starts_with("did not consume `3` items, consumed `2`")
        );
    }

    #[test]
    fn test_first_stage_failure_propagates() {
        let parser = string("a").flat_map(|_| string("b"));

        let result = parser.parse(StrCursor::new("bb"));
        assert_eq!(
            result.unwrap_err().message(),
            "expected prefix `a` but found `bb`"
        );
    }

    #[test]
    fn test_closing_matches_opening() {
        let parser =
            one_of("([").flat_map(|open: char| string(if open == '(' { ")" } else { "]" }));

        let (close, _) = parser.parse(StrCursor::new("[]")).unwrap();
        assert_eq!(close, "]");
        assert!(parser.parse(StrCursor::new("(]")).is_err());
    }
}
