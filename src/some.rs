use crate::failure::Failure;
use crate::many::collect;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails with the inner parser's failure when the first attempt fails.
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<P> Parser for OneOrMore<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let (first, next) = self.parser.parse(cursor)?;
        Ok(collect(&self.parser, vec![first], next))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<P>(parser: P) -> OneOrMore<P>
where
    P: Parser,
{
    OneOrMore::new(parser)
}

/// Extension trait to add .one_or_more() method support for parsers
pub trait OneOrMoreExt: Parser + Sized {
    fn one_or_more(self) -> OneOrMore<Self> {
        OneOrMore::new(self)
    }
}

/// Implement OneOrMoreExt for all parsers
impl<P> OneOrMoreExt for P where P: Parser {}
