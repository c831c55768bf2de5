use crate::{Cursor, ParseResult};
use std::{marker::PhantomData, rc::Rc, sync::Arc};
use tracing::trace;

/// A stateless, reusable recognizer producing `Output`.
///
/// All state lives in the cursor handed to [`Parser::parse`], so one parser
/// value can be run any number of times, from any number of threads.
pub trait Parser {
    type Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output>;

    /// Runs from the scalar `offset` of `input` without requiring the whole
    /// input to be consumed, and returns the unconsumed rest with the match.
    ///
    /// Panics if `input` holds fewer than `offset` scalars.
    fn run_from<'a>(&self, input: &'a str, offset: usize) -> (Option<Self::Output>, &'a str) {
        let (output, rest) = self.parse(Cursor::at(input, offset)).into_option();
        (output, rest.remaining())
    }

    /// Runs over the whole of `input`. A match that leaves input behind is no
    /// match.
    fn run(&self, input: &str) -> Option<Self::Output> {
        match self.run_from(input, 0) {
            (Some(output), "") => Some(output),
            (Some(_), rest) => {
                trace!(
                    input_bytes = input.len(),
                    trailing_bytes = rest.len(),
                    "match rejected, input left unconsumed"
                );
                None
            }
            (None, _) => None,
        }
    }
}

impl<P: ?Sized + Parser> Parser for &P {
    type Output = P::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output> {
        P::parse(self, input)
    }
}

impl<P: ?Sized + Parser> Parser for Box<P> {
    type Output = P::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output> {
        P::parse(self, input)
    }
}

impl<P: ?Sized + Parser> Parser for Rc<P> {
    type Output = P::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output> {
        P::parse(self, input)
    }
}

impl<P: ?Sized + Parser> Parser for Arc<P> {
    type Output = P::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output> {
        P::parse(self, input)
    }
}

/// Turns a function over cursors into a parser, so that grammar rules can be
/// plain `fn` items.
pub fn from_fn<O, F>(f: F) -> FromFn<O, F>
where
    F: for<'a> Fn(Cursor<'a>) -> ParseResult<'a, O>,
{
    FromFn {
        f,
        marker: PhantomData,
    }
}

pub struct FromFn<O, F> {
    f: F,
    marker: PhantomData<fn() -> O>,
}

impl<O, F: Clone> Clone for FromFn<O, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            marker: PhantomData,
        }
    }
}

impl<O, F: Copy> Copy for FromFn<O, F> {}

impl<O, F> Parser for FromFn<O, F>
where
    F: for<'a> Fn(Cursor<'a>) -> ParseResult<'a, O>,
{
    type Output = O;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, O> {
        (self.f)(input)
    }
}
