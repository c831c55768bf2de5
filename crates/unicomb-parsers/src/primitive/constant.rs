use std::marker::PhantomData;
use unicomb_core::{done, fail, Cursor, ParseResult, Parser};

/// Matches without consuming anything, yielding a clone of `value`.
pub fn always<V: Clone>(value: V) -> Always<V> {
    Always { value }
}

/// Never matches.
pub fn never<O>() -> Never<O> {
    Never(PhantomData)
}

/// A delimiter for elements that directly follow each other.
pub fn no_delimiter() -> Always<()> {
    always(())
}

#[derive(Debug, Clone, Copy)]
pub struct Always<V> {
    value: V,
}

impl<V: Clone> Parser for Always<V> {
    type Output = V;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, V> {
        done(self.value.clone(), input)
    }
}

pub struct Never<O>(PhantomData<fn() -> O>);

impl<O> Clone for Never<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Never<O> {}

impl<O> Parser for Never<O> {
    type Output = O;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, O> {
        fail(input)
    }
}
