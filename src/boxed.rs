use std::fmt;
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use crate::and::AndExt;
use crate::failure::Failure;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;

/// A type-erased parser
///
/// Cloning is cheap and clones share the same underlying parser, which may be
/// used from several threads at once. Boxing is also how recursive grammars
/// get a nameable type (see [`lazy`](crate::lazy::lazy)).
///
/// Boxed parsers support an operator notation on top of the named methods:
///
/// | operator | meaning | named method |
/// |----------|---------|--------------|
/// | `a + b`  | sequence, keep both | [`and`](AndExt::and) |
/// | `a - b`  | sequence, keep left | [`discard_right`](AndExt::discard_right) |
/// | `a * b`  | sequence, keep right | [`discard_left`](AndExt::discard_left) |
/// | `a \| b` | ordered choice | [`or`](OrExt::or) |
/// | `a >> f` | map | [`map`](MapExt::map) |
pub struct BoxedParser<'a, C, O> {
    inner: Arc<dyn Parser<Cursor = C, Output = O> + Send + Sync + 'a>,
}

impl<'a, C, O> BoxedParser<'a, C, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Cursor = C, Output = O> + Send + Sync + 'a,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<C, O> Clone for BoxedParser<'_, C, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, O> fmt::Debug for BoxedParser<'_, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

impl<C, O> Parser for BoxedParser<'_, C, O>
where
    C: crate::cursor::Cursor,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> Result<(O, C), Failure> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, Self::Cursor, Self::Output>
    where
        Self: Send + Sync + 'a,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}

/// `+` for sequence: A + B -> (A, B)
impl<'a, C, T, U> Add<BoxedParser<'a, C, U>> for BoxedParser<'a, C, T>
where
    C: crate::cursor::Cursor + 'a,
    T: 'a,
    U: 'a,
{
    type Output = BoxedParser<'a, C, (T, U)>;

    fn add(self, rhs: BoxedParser<'a, C, U>) -> Self::Output {
        self.and(rhs).boxed()
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<'a, C, T, U> Sub<BoxedParser<'a, C, U>> for BoxedParser<'a, C, T>
where
    C: crate::cursor::Cursor + 'a,
    T: 'a,
    U: 'a,
{
    type Output = BoxedParser<'a, C, T>;

    fn sub(self, rhs: BoxedParser<'a, C, U>) -> Self::Output {
        self.discard_right(rhs).boxed()
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<'a, C, T, U> Mul<BoxedParser<'a, C, U>> for BoxedParser<'a, C, T>
where
    C: crate::cursor::Cursor + 'a,
    T: 'a,
    U: 'a,
{
    type Output = BoxedParser<'a, C, U>;

    fn mul(self, rhs: BoxedParser<'a, C, U>) -> Self::Output {
        self.discard_left(rhs).boxed()
    }
}

/// `|` for choice: A | B -> A or B
impl<'a, C, T> BitOr for BoxedParser<'a, C, T>
where
    C: crate::cursor::Cursor + 'a,
    T: 'a,
{
    type Output = BoxedParser<'a, C, T>;

    fn bitor(self, rhs: BoxedParser<'a, C, T>) -> Self::Output {
        self.or(rhs).boxed()
    }
}

/// `>>` for map: A >> fn -> B
impl<'a, C, T, U, F> Shr<F> for BoxedParser<'a, C, T>
where
    C: crate::cursor::Cursor + 'a,
    T: 'a,
    U: 'a,
    F: Fn(T) -> U + Send + Sync + 'a,
{
    type Output = BoxedParser<'a, C, U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f).boxed()
    }
}
