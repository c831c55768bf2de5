use unicomb_core::{Cursor, ParseResult, Parser};

/// A type-erased parser, for naming the type of a rule.
pub struct Boxed<O> {
    parser: Box<dyn Parser<Output = O> + Send + Sync>,
}

impl<O> Boxed<O> {
    pub fn new<P: Parser<Output = O> + Send + Sync + 'static>(parser: P) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }
}

impl<O> Parser for Boxed<O> {
    type Output = O;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, O> {
        self.parser.parse(input)
    }
}
