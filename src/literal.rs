use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;
use crate::symbol::{Literal, Symbol};
use std::marker::PhantomData;

/// Parser that matches an exact sequence of symbols
pub struct StringParser<C, L: Literal> {
    expected: L,
    symbols: Vec<L::Symbol>,
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C, L: Literal> StringParser<C, L> {
    pub fn new(expected: L) -> Self {
        let symbols = expected.to_symbols();
        StringParser {
            expected,
            symbols,
            _cursor: PhantomData,
        }
    }
}

impl<C, L> Parser for StringParser<C, L>
where
    C: Cursor<Symbol = L::Symbol>,
    L: Literal + Clone,
{
    type Cursor = C;
    type Output = L;

    fn parse(&self, cursor: C) -> Result<(L, C), Failure> {
        if !cursor.has_prefix(&self.symbols) {
            return Err(Failure::expected_prefix(
                &<L::Symbol as Symbol>::render(&self.symbols),
                &cursor.snippet(),
            ));
        }

        Ok((self.expected.clone(), cursor.drop_first(self.symbols.len())))
    }
}

/// Convenience function to create a StringParser
pub fn string<C, L: Literal>(expected: L) -> StringParser<C, L> {
    StringParser::new(expected)
}
