use crate::failure::Failure;
use crate::parser::Parser;

/// Parser combinator that runs a parser of functions, then a parser of
/// arguments, and applies the one to the other
///
/// The function parser always runs first.
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<PF, PA, B> Parser for Apply<PF, PA>
where
    PF: Parser,
    PA: Parser<Cursor = PF::Cursor>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type Cursor = PF::Cursor;
    type Output = B;

    fn parse(&self, cursor: Self::Cursor) -> Result<(B, Self::Cursor), Failure> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<PF, PA>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser,
    PA: Parser<Cursor = PF::Cursor>,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers of functions
pub trait ApplyExt: Parser + Sized {
    fn apply<PA>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<Cursor = Self::Cursor>,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<P> ApplyExt for P where P: Parser {}

/// Parser that lifts a binary function over two sequential parsers
pub struct Lift2<F, PA, PB> {
    function: F,
    first: PA,
    second: PB,
}

impl<F, PA, PB, R> Parser for Lift2<F, PA, PB>
where
    PA: Parser,
    PB: Parser<Cursor = PA::Cursor>,
    F: Fn(PA::Output, PB::Output) -> R,
{
    type Cursor = PA::Cursor;
    type Output = R;

    fn parse(&self, cursor: Self::Cursor) -> Result<(R, Self::Cursor), Failure> {
        let (a, cursor) = self.first.parse(cursor)?;
        let (b, cursor) = self.second.parse(cursor)?;
        Ok(((self.function)(a, b), cursor))
    }
}

/// Lift a binary function into a parser that runs `first` then `second`
pub fn lift2<F, PA, PB, R>(function: F, first: PA, second: PB) -> Lift2<F, PA, PB>
where
    PA: Parser,
    PB: Parser<Cursor = PA::Cursor>,
    F: Fn(PA::Output, PB::Output) -> R,
{
    Lift2 {
        function,
        first,
        second,
    }
}

/// Parser that lifts a ternary function over three sequential parsers
pub struct Lift3<F, PA, PB, PC> {
    function: F,
    first: PA,
    second: PB,
    third: PC,
}

impl<F, PA, PB, PC, R> Parser for Lift3<F, PA, PB, PC>
where
    PA: Parser,
    PB: Parser<Cursor = PA::Cursor>,
    PC: Parser<Cursor = PA::Cursor>,
    F: Fn(PA::Output, PB::Output, PC::Output) -> R,
{
    type Cursor = PA::Cursor;
    type Output = R;

    fn parse(&self, cursor: Self::Cursor) -> Result<(R, Self::Cursor), Failure> {
        let (a, cursor) = self.first.parse(cursor)?;
        let (b, cursor) = self.second.parse(cursor)?;
        let (c, cursor) = self.third.parse(cursor)?;
        Ok(((self.function)(a, b, c), cursor))
    }
}

/// Lift a ternary function into a parser that runs `first`, `second`, then `third`
///
/// This is the usual way to assemble a record from sequential field parses.
pub fn lift3<F, PA, PB, PC, R>(
    function: F,
    first: PA,
    second: PB,
    third: PC,
) -> Lift3<F, PA, PB, PC>
where
    PA: Parser,
    PB: Parser<Cursor = PA::Cursor>,
    PC: Parser<Cursor = PA::Cursor>,
    F: Fn(PA::Output, PB::Output, PC::Output) -> R,
{
    Lift3 {
        function,
        first,
        second,
        third,
    }
}
