use crate::character::one_of;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::symbol::Symbol;

/// Parser that matches a single blank symbol (space, tab, newline, carriage return)
pub fn whitespace<C>() -> impl Parser<Cursor = C, Output = C::Symbol>
where
    C: Cursor,
{
    one_of(<C::Symbol as Symbol>::BLANKS)
}
