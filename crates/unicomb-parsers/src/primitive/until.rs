use unicomb_core::{done, Cursor, ParseResult, Parser};

/// Collects scalars up to the first position where `delimiter` matches.
///
/// The delimiter is only probed, never consumed. Reaching the end of input
/// without seeing it is still a match of everything collected.
pub fn characters_until<D: Parser>(delimiter: D) -> CharactersUntil<D> {
    CharactersUntil { delimiter }
}

#[derive(Debug, Clone, Copy)]
pub struct CharactersUntil<D> {
    delimiter: D,
}

impl<D: Parser> Parser for CharactersUntil<D> {
    type Output = String;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, String> {
        let anchor = input.anchor();
        let mut rest = input;

        while !rest.is_empty() {
            if self.delimiter.parse(rest).is_done() {
                break;
            }
            let Some((_, next)) = rest.next_char() else {
                break;
            };
            rest = next;
        }

        done(rest.consumed_since(&anchor).to_owned(), rest)
    }
}
