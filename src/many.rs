use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Stops at the first failure of the inner parser and returns
/// the cursor as it was before that attempt. An inner parser that succeeds
/// without consuming anything also stops the loop, after keeping its value
/// once.
pub struct ZeroOrMore<P> {
    parser: P,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore { parser }
    }
}

impl<P> Parser for ZeroOrMore<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        Ok(collect(&self.parser, Vec::new(), cursor))
    }
}

/// Keep applying `parser`, pushing onto `results`, until it fails or stalls
pub(crate) fn collect<P: Parser>(
    parser: &P,
    mut results: Vec<P::Output>,
    mut cursor: P::Cursor,
) -> (Vec<P::Output>, P::Cursor) {
    while let Ok((value, next)) = parser.parse(cursor) {
        results.push(value);
        if next.width() == cursor.width() {
            break;
        }
        cursor = next;
    }

    (results, cursor)
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser,
{
    ZeroOrMore::new(parser)
}

/// Extension trait to add .zero_or_more() method support for parsers
pub trait ZeroOrMoreExt: Parser + Sized {
    fn zero_or_more(self) -> ZeroOrMore<Self> {
        ZeroOrMore::new(self)
    }
}

/// Implement ZeroOrMoreExt for all parsers
impl<P> ZeroOrMoreExt for P where P: Parser {}
