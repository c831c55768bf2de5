use super::Alternatives;
use unicomb_core::{Cursor, ParseResult, ParseResult::*, Parser};

/// Ordered choice: the first candidate that matches wins and the rest are not
/// tried.
///
/// `First` does not save and restore the cursor between candidates. Each
/// candidate is expected to be atomic, leaving the cursor where it started when
/// it fails; the next candidate resumes from whatever cursor the failed one
/// handed back. Every parser in this crate upholds that. Use [`longest`] when
/// candidates of unknown behaviour have to be isolated from each other.
///
/// [`longest`]: crate::longest
pub fn first<A: Alternatives>(alternatives: A) -> First<A> {
    First::new(alternatives)
}

#[derive(Debug, Clone, Copy)]
pub struct First<A> {
    alternatives: A,
}

impl<A> First<A> {
    pub fn new(alternatives: A) -> Self {
        Self { alternatives }
    }
}

impl<A: Alternatives> Parser for First<A> {
    type Output = A::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, A::Output> {
        let mut rest = input;
        let mut index = 0;

        while let Some(result) = self.alternatives.attempt(index, rest) {
            match result {
                Done(v, r) => return Done(v, r),
                Fail(r) => rest = r,
            }
            index += 1;
        }

        Fail(rest)
    }
}
