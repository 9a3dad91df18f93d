use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// # Note
/// - Requires at least one element
/// - A separator must be followed by an item; a trailing separator is an error
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<P, PS> Parser for SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];

        while let Ok((_, after_separator)) = self.separator.parse(cursor) {
            let (value, next) = self.parser.parse(after_separator)?;
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser<Cursor = P::Cursor>,
{
    SeparatedList::new(parser, separator)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedListExt: Parser + Sized {
    fn separated_by<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<Cursor = Self::Cursor>,
    {
        SeparatedList::new(self, separator)
    }
}

/// Implement SeparatedListExt for all parsers
impl<P> SeparatedListExt for P where P: Parser {}
