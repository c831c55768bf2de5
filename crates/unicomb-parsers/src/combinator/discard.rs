use unicomb_core::{Cursor, ParseResult, Parser};

/// Runs the inner parser and throws its output away.
#[derive(Debug, Clone, Copy)]
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Discard<P> {
    type Output = ();

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, ()> {
        self.parser.parse(input).map(|_| ())
    }
}
