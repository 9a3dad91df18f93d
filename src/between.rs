use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that matches content surrounded by an opening and a
/// closing parser, keeping only the content
///
/// All three stages are required; the first failure is propagated as is.
pub struct Between<O, P, Cl> {
    open: O,
    content: P,
    close: Cl,
}

impl<O, P, Cl> Between<O, P, Cl> {
    pub fn new(open: O, content: P, close: Cl) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<O, P, Cl> Parser for Between<O, P, Cl>
where
    O: Parser,
    P: Parser<Cursor = O::Cursor>,
    Cl: Parser<Cursor = O::Cursor>,
{
    type Cursor = O::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(P::Output, Self::Cursor), Failure> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between open and close delimiters
pub fn between<O, P, Cl>(open: O, content: P, close: Cl) -> Between<O, P, Cl>
where
    O: Parser,
    P: Parser<Cursor = O::Cursor>,
    Cl: Parser<Cursor = O::Cursor>,
{
    Between::new(open, content, close)
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt: Parser + Sized {
    fn between<O, Cl>(self, open: O, close: Cl) -> Between<O, Self, Cl>
    where
        O: Parser<Cursor = Self::Cursor>,
        Cl: Parser<Cursor = Self::Cursor>,
    {
        Between::new(open, self, close)
    }
}

/// Implement BetweenExt for all parsers
impl<P> BetweenExt for P where P: Parser {}
