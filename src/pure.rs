use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Pure<C, T> {
    value: T,
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C, T> Pure<C, T> {
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<C, T> Parser for Pure<C, T>
where
    C: Cursor,
    T: Clone,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: C) -> Result<(T, C), Failure> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<C, T: Clone>(value: T) -> Pure<C, T> {
    Pure::new(value)
}

/// Parser that always fails with a fixed message without consuming input
pub struct Fail<C, T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn(C) -> (T, C)>,
}

impl<C, T> Parser for Fail<C, T>
where
    C: Cursor,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, _cursor: C) -> Result<(T, C), Failure> {
        Err(Failure::new(self.message.clone()))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<C, T>(message: impl Into<Cow<'static, str>>) -> Fail<C, T> {
    Fail {
        message: message.into(),
        _output: PhantomData,
    }
}
