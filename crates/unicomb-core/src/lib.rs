mod cursor;
mod parse_result;
mod parser;

pub use cursor::{Anchor, Cursor};
pub use parse_result::ParseResult;
pub use parser::{from_fn, FromFn, Parser};

pub type ParserResult<'a, P> = ParseResult<'a, <P as Parser>::Output>;

pub fn done<O>(output: O, rest: Cursor<'_>) -> ParseResult<'_, O> {
    ParseResult::Done(output, rest)
}

pub fn fail<O>(rest: Cursor<'_>) -> ParseResult<'_, O> {
    ParseResult::Fail(rest)
}
