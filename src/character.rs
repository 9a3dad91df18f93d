use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;
use crate::symbol::{Literal, Symbol};
use std::marker::PhantomData;

/// Parser that consumes one symbol satisfying a predicate
pub struct CharacterThat<C, S, F> {
    predicate: F,
    _cursor: PhantomData<fn(C) -> S>,
}

impl<C, S, F> CharacterThat<C, S, F> {
    pub fn new(predicate: F) -> Self {
        CharacterThat {
            predicate,
            _cursor: PhantomData,
        }
    }
}

impl<C, S, F> Parser for CharacterThat<C, S, F>
where
    C: Cursor<Symbol = S>,
    S: Symbol,
    F: Fn(S) -> bool,
{
    type Cursor = C;
    type Output = S;

    fn parse(&self, cursor: C) -> Result<(S, C), Failure> {
        match cursor.peek_first() {
            Some(symbol) if (self.predicate)(symbol) => Ok((symbol, cursor.drop_first(1))),
            _ => Err(Failure::predicate_failed(&cursor.snippet())),
        }
    }
}

/// Convenience function to create a CharacterThat parser
pub fn character_that<C, S, F>(predicate: F) -> CharacterThat<C, S, F>
where
    S: Symbol,
    F: Fn(S) -> bool,
{
    CharacterThat::new(predicate)
}

/// Parser that matches any symbol contained in `set`
pub fn one_of<C, L>(set: L) -> CharacterThat<C, L::Symbol, impl Fn(L::Symbol) -> bool>
where
    L: Literal,
{
    let set = set.to_symbols();
    character_that(move |symbol| set.contains(&symbol))
}

/// Parser that matches any symbol not contained in `set`
pub fn none_of<C, L>(set: L) -> CharacterThat<C, L::Symbol, impl Fn(L::Symbol) -> bool>
where
    L: Literal,
{
    let set = set.to_symbols();
    character_that(move |symbol| !set.contains(&symbol))
}
