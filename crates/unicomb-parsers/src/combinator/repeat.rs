use super::{Discard, Zip};
use crate::primitive::{literal, skip_whitespace, Literal, SkipWhitespace};
use tracing::debug;
use unicomb_core::{Cursor, ParseResult, ParseResult::*, Parser};

/// Zero or more `parser` matches separated by `delimiter`.
pub fn zero_or_more<P: Parser, D: Parser>(parser: P, delimiter: D) -> ZeroOrMore<P, D> {
    ZeroOrMore::new(parser, delimiter)
}

/// Zero or more `parser` matches separated by a comma and any whitespace after
/// it, so `"a, b,c"` reads as three elements.
pub fn delimited_zero_or_more<P: Parser>(parser: P) -> ZeroOrMore<P, CommaSeparator> {
    ZeroOrMore::new(parser, comma_separator())
}

pub type CommaSeparator = Discard<Zip<(Literal<&'static str>, SkipWhitespace)>>;

pub fn comma_separator() -> CommaSeparator {
    Discard::new(Zip::new((literal(","), skip_whitespace())))
}

#[derive(Debug, Clone, Copy)]
pub struct ZeroOrMore<P, D> {
    parser: P,
    delimiter: D,
}

impl<P, D> ZeroOrMore<P, D> {
    pub fn new(parser: P, delimiter: D) -> Self {
        Self { parser, delimiter }
    }
}

impl<P: Parser, D: Parser> Parser for ZeroOrMore<P, D> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output> {
        let mut items = Vec::new();

        let mut rest = match self.parser.parse(input) {
            Done(v, r) => {
                items.push(v);
                r
            }
            Fail(r) => return Done(items, r.rewind(input.anchor())),
        };

        while !rest.is_empty() {
            let anchor = rest.anchor();

            let after_delimiter = match self.delimiter.parse(rest) {
                Done(_, r) => r,
                Fail(r) => {
                    rest = r.rewind(anchor);
                    break;
                }
            };

            // an element that fails takes its delimiter back with it
            match self.parser.parse(after_delimiter) {
                Done(_, r) if r.position() == anchor.position() => {
                    debug!(
                        position = anchor.position(),
                        "repetition stopped, a delimiter and element consumed nothing"
                    );
                    rest = r.rewind(anchor);
                    break;
                }
                Done(v, r) => {
                    items.push(v);
                    rest = r;
                }
                Fail(r) => {
                    rest = r.rewind(anchor);
                    break;
                }
            }
        }

        Done(items, rest)
    }
}
