use unicomb_core::{Cursor, ParseResult, ParseResult::*, Parser};

/// Monadic bind: the output of the first parser picks the parser that runs
/// next. Both steps form one transaction; if either fails the cursor goes back
/// to where the first step started.
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<P, F> {
    parser: P,
    binding: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binding: F) -> Self {
        Self { parser, binding }
    }
}

impl<P, F, Q> Parser for FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Q::Output> {
        let anchor = input.anchor();

        let (output, rest) = match self.parser.parse(input) {
            Done(v, r) => (v, r),
            Fail(r) => return Fail(r.rewind(anchor)),
        };

        match (self.binding)(output).parse(rest) {
            Done(v, r) => Done(v, r),
            Fail(r) => Fail(r.rewind(anchor)),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{literal, non_negative_integer, ParserExtension};
    use unicomb_core::{Cursor, ParseResult::*, Parser};

    #[test]
    fn second_parser_depends_on_first_output() {
        let parser = non_negative_integer()
            .flat_map(|n| literal(if n == 1 { "st" } else { "nd" }).map(move |()| n));

        assert_eq!(parser.run("1st"), Some(1));
        assert_eq!(parser.run("2nd"), Some(2));
        assert_eq!(parser.run("1nd"), None);
    }

    #[test]
    fn failing_second_step_restores_the_cursor() {
        let parser = literal("ab").flat_map(|()| literal("cd"));
        let input = Cursor::new("abxx");

        assert_eq!(parser.parse(input), Fail(input));
    }

    #[test]
    fn nested_bindings_are_one_transaction() {
        let parser = literal("<")
            .flat_map(|()| non_negative_integer())
            .flat_map(|n| literal(">").map(move |()| n));
        let input = Cursor::new("<7");

        assert_eq!(parser.run("<7>"), Some(7));
        assert_eq!(parser.parse(input), Fail(input));
    }
}
