use crate::and::AndExt;
use crate::cursor::Cursor;
use crate::literal::string;
use crate::many::ZeroOrMoreExt;
use crate::parser::Parser;
use crate::symbol::Literal;
use crate::text::whitespace::whitespace;

/// Run `parser`, then skip any blanks that follow it
pub fn lexeme<P>(parser: P) -> impl Parser<Cursor = P::Cursor, Output = P::Output>
where
    P: Parser,
{
    parser.discard_right(whitespace::<P::Cursor>().zero_or_more())
}

/// Match `literal`, then skip any blanks that follow it
pub fn string_ignoring_trailing_whitespace<C, L>(literal: L) -> impl Parser<Cursor = C, Output = L>
where
    C: Cursor<Symbol = L::Symbol>,
    L: Literal + Clone,
{
    lexeme(string::<C, L>(literal))
}
