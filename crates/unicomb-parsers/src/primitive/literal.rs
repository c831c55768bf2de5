use crate::{first, longest, ParserExtension};
use unicomb_core::{done, fail, Cursor, ParseResult, Parser};

/// Matches `text` exactly, scalar by scalar.
pub fn literal<T: AsRef<str>>(text: T) -> Literal<T> {
    Literal { text }
}

/// Matches `text` and yields `value`.
pub fn literal_as<T: AsRef<str>, V: Clone>(text: T, value: V) -> impl Parser<Output = V> {
    literal(text).map(move |()| value.clone())
}

/// The first of `texts` that matches, yielding `value`.
pub fn first_literal<I, V>(texts: I, value: V) -> impl Parser<Output = V>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    V: Clone,
{
    first(texts.into_iter().map(literal).collect::<Vec<_>>()).map(move |()| value.clone())
}

/// The longest of `texts` that matches, yielding `value`.
pub fn longest_literal<I, V>(texts: I, value: V) -> impl Parser<Output = V>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    V: Clone,
{
    longest(texts.into_iter().map(literal).collect::<Vec<_>>()).map(move |()| value.clone())
}

#[derive(Debug, Clone, Copy)]
pub struct Literal<T> {
    text: T,
}

impl<T: AsRef<str>> Parser for Literal<T> {
    type Output = ();

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, ()> {
        let text = self.text.as_ref();
        if input.starts_with(text) {
            done((), input.advance_str(text))
        } else {
            fail(input)
        }
    }
}
