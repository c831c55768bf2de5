use unicomb_core::{done, Cursor, ParseResult, Parser};

/// Skips any run of whitespace, possibly empty. Never fails.
pub fn skip_whitespace() -> SkipWhitespace {
    SkipWhitespace
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkipWhitespace;

impl Parser for SkipWhitespace {
    type Output = ();

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, ()> {
        done((), input.advance_while(char::is_whitespace))
    }
}
