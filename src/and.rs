use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples. Use [`lift3`](crate::apply::lift3)
/// or [`map`](crate::map::MapExt::map) to build a flat value instead.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Runs two parsers in sequence and keeps only the right value
///
/// The left parser must still succeed; this is how separators and
/// delimiters are enforced without keeping them.
pub struct DiscardLeft<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Parser for DiscardLeft<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(P2::Output, Self::Cursor), Failure> {
        let (_, cursor) = self.left.parse(cursor)?;
        self.right.parse(cursor)
    }
}

/// Runs two parsers in sequence and keeps only the left value
pub struct DiscardRight<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Parser for DiscardRight<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(P1::Output, Self::Cursor), Failure> {
        let (value, cursor) = self.left.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Extension trait to add sequencing methods to parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }

    /// Run `self` then `other`, keeping `other`'s value
    fn discard_left<P>(self, other: P) -> DiscardLeft<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        DiscardLeft {
            left: self,
            right: other,
        }
    }

    /// Run `self` then `other`, keeping `self`'s value
    fn discard_right<P>(self, other: P) -> DiscardRight<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        DiscardRight {
            left: self,
            right: other,
        }
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
