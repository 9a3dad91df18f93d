use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> Result<(U, Self::Cursor), Failure> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::one_of;
    use crate::cursors::StrCursor;
    use crate::literal::string;
    use crate::or::OrExt;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Keyword(&'static str),
    }

    #[test]
    fn test_map_symbol_to_digit() {
        let parser = one_of("0123456789").map(|ch: char| ch.to_digit(10));

        let (digit, cursor) = parser.parse(StrCursor::new("5x")).unwrap();
        assert_eq!(digit, Some(5));
        assert_eq!(cursor.as_str(), "x");
    }

    #[test]
    fn test_map_to_enum() {
        let parser = string("fn").map(Token::Keyword);

        let (token, cursor) = parser.parse(StrCursor::new("fn")).unwrap();
        assert_eq!(token, Token::Keyword("fn"));
        assert!(cursor.as_str().is_empty());
    }

    #[test]
    fn test_map_chaining() {
        let parser = string("5")
            .map(|text: &str| text.len())
            .map(|len| len * 10)
            .map(|n| format!("Length: {}", n));

        let (result, _) = parser.parse(StrCursor::new("5")).unwrap();
        assert_eq!(result, "Length: 10");
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let keyword = string("let").map(Token::Keyword);
        let letter = one_of("lxyz").map(Token::Letter);

        // Both branches now produce Token, so they can be alternatives
        let parser = keyword.or(letter);

        let (token, cursor) = parser.parse(StrCursor::new("lx")).unwrap();
        assert_eq!(token, Token::Letter('l'));
        assert_eq!(cursor.as_str(), "x");

        let (token, _) = parser.parse(StrCursor::new("let")).unwrap();
        assert_eq!(token, Token::Keyword("let"));
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = string("A").map(|text: &str| text.to_lowercase());

        let result = parser.parse(StrCursor::new("xyz"));
        assert_eq!(
            result.unwrap_err().message(),
            "expected prefix `A` but found `xyz`"
        );
    }

    #[test]
    fn test_map_leaves_cursor_untouched() {
        let (_, cursor) = string("ab")
            .map(|_| ())
            .parse(StrCursor::new("abc"))
            .unwrap();
        assert_eq!(cursor.as_str(), "c");
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(string("9"), |text: &str| text.parse::<u8>());

        let (value, _) = parser.parse(StrCursor::new("9")).unwrap();
        assert_eq!(value, Ok(9));
    }
}
