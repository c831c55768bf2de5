use super::Alternatives;
use unicomb_core::{Cursor, ParseResult, ParseResult::*, Parser};

/// Longest-match choice: every candidate runs against its own copy of the
/// starting cursor, and the one that got furthest wins. Ties go to the
/// earliest candidate.
pub fn longest<A: Alternatives>(alternatives: A) -> Longest<A> {
    Longest::new(alternatives)
}

#[derive(Debug, Clone, Copy)]
pub struct Longest<A> {
    alternatives: A,
}

impl<A> Longest<A> {
    pub fn new(alternatives: A) -> Self {
        Self { alternatives }
    }
}

impl<A: Alternatives> Parser for Longest<A> {
    type Output = A::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, A::Output> {
        let mut best: Option<(A::Output, Cursor<'a>)> = None;
        let mut index = 0;

        while let Some(result) = self.alternatives.attempt(index, input) {
            if let Done(v, r) = result {
                let further = match &best {
                    Some((_, b)) => r.position() > b.position(),
                    None => true,
                };
                if further {
                    best = Some((v, r));
                }
            }
            index += 1;
        }

        match best {
            Some((v, r)) => Done(v, r),
            None => Fail(input),
        }
    }
}
