use unicomb_core::{done, fail, Cursor, ParseResult, Parser};

/// Any single scalar; fails only at the end of input.
pub fn any_char() -> AnyChar {
    AnyChar
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChar;

impl Parser for AnyChar {
    type Output = char;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, char> {
        match input.next_char() {
            Some((c, rest)) => done(c, rest),
            None => fail(input),
        }
    }
}
