use crate::Cursor;

/// Outcome of running a parser at a cursor.
///
/// `Fail` carries no reason, only the cursor the failing parser left behind.
/// For an atomic parser that is the cursor it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<'a, O> {
    Done(O, Cursor<'a>),
    Fail(Cursor<'a>),
}

use ParseResult::*;

impl<'a, O> ParseResult<'a, O> {
    pub fn map<T>(self, f: impl FnOnce(O) -> T) -> ParseResult<'a, T> {
        match self {
            Done(v, r) => Done(f(v), r),
            Fail(r) => Fail(r),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Done(_, _))
    }

    pub fn rest(&self) -> Cursor<'a> {
        match self {
            Done(_, r) => *r,
            Fail(r) => *r,
        }
    }

    pub fn into_option(self) -> (Option<O>, Cursor<'a>) {
        match self {
            Done(v, r) => (Some(v), r),
            Fail(r) => (None, r),
        }
    }

    pub fn unwrap(self) -> (O, Cursor<'a>) {
        match self {
            Done(v, r) => (v, r),
            Fail(r) => panic!(
                "called ParseResult::unwrap on a Fail value; remaining input: {:?}.",
                r.remaining()
            ),
        }
    }
}
