use unicomb_core::{Cursor, ParseResult, Parser};

#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    mapping: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapping: F) -> Self {
        Self { parser, mapping }
    }
}

impl<P: Parser, U, F: Fn(P::Output) -> U> Parser for Map<P, F> {
    type Output = U;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, U> {
        self.parser.parse(input).map(&self.mapping)
    }
}
