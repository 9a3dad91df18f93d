use std::marker::PhantomData;

use crate::failure::Failure;
use crate::parser::Parser;

/// A value with an identity element and an associative merge
///
/// `T::empty().combine(x) == x` and `x.combine(T::empty()) == x` must hold.
pub trait Monoid: Sized {
    fn empty() -> Self;
    fn combine(self, other: Self) -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Monoid for () {
    fn empty() -> Self {}

    fn combine(self, _other: Self) -> Self {}
}

/// Parser combinator that runs two parsers in order and merges their values
pub struct Combine<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Combine<P1, P2> {
    pub fn new(left: P1, right: P2) -> Self {
        Combine { left, right }
    }
}

impl<P1, P2> Parser for Combine<P1, P2>
where
    P1: Parser,
    P1::Output: Monoid,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let (left, cursor) = self.left.parse(cursor)?;
        let (right, cursor) = self.right.parse(cursor)?;
        Ok((Monoid::combine(left, right), cursor))
    }
}

/// Parser that yields the identity element without consuming anything
pub struct Empty<C, T> {
    _marker: PhantomData<fn(C) -> (T, C)>,
}

impl<C, T> Parser for Empty<C, T>
where
    C: crate::cursor::Cursor,
    T: Monoid,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: C) -> Result<(T, C), Failure> {
        Ok((T::empty(), cursor))
    }
}

/// Creates a parser that always succeeds with `T::empty()`
pub fn empty<C, T>() -> Empty<C, T>
where
    C: crate::cursor::Cursor,
    T: Monoid,
{
    Empty {
        _marker: PhantomData,
    }
}

/// Parser that runs a list of parsers in order and folds their values with
/// [`Monoid::combine`], starting from [`Monoid::empty`]
pub struct Concat<P> {
    parsers: Vec<P>,
}

impl<P> Parser for Concat<P>
where
    P: Parser,
    P::Output: Monoid,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Failure> {
        let mut acc = <P::Output as Monoid>::empty();

        for parser in &self.parsers {
            let (value, next) = parser.parse(cursor)?;
            acc = Monoid::combine(acc, value);
            cursor = next;
        }

        Ok((acc, cursor))
    }
}

/// Creates a parser that concatenates the values of `parsers`, run in order
///
/// Parsers of different types can be mixed by [`boxed`](crate::boxed::BoxedExt::boxed)
/// them first.
pub fn concat<P>(parsers: Vec<P>) -> Concat<P>
where
    P: Parser,
    P::Output: Monoid,
{
    Concat { parsers }
}

/// Extension trait to add .combine() method support for parsers with monoid output
pub trait CombineExt: Parser + Sized {
    fn combine<P>(self, other: P) -> Combine<Self, P>
    where
        Self::Output: Monoid,
        P: Parser<Cursor = Self::Cursor, Output = Self::Output>,
    {
        Combine::new(self, other)
    }
}

/// Implement CombineExt for all parsers
impl<P> CombineExt for P where P: Parser {}
