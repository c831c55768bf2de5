use unicomb_core::{Cursor, ParseResult, ParseResult::*, Parser};

/// Runs a tuple of parsers in order and collects their outputs into a tuple of
/// the same arity.
///
/// The sequence is atomic: when any member fails, the cursor goes back to where
/// the first member started.
pub fn zip<T>(parsers: T) -> Zip<T> {
    Zip::new(parsers)
}

#[derive(Debug, Clone, Copy)]
pub struct Zip<T> {
    parsers: T,
}

impl<T> Zip<T> {
    pub fn new(parsers: T) -> Self {
        Self { parsers }
    }
}

macro_rules! zip_impl {
    ($($p:ident $parser:ident $output:ident),+) => {
        impl<$($p: Parser),+> Parser for Zip<($($p,)+)> {
            type Output = ($($p::Output,)+);

            fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, Self::Output> {
                let anchor = input.anchor();
                let ($($parser,)+) = &self.parsers;
                let rest = input;

                $(
                    let ($output, rest) = match $parser.parse(rest) {
                        Done(v, r) => (v, r),
                        Fail(r) => return Fail(r.rewind(anchor)),
                    };
                )+

                Done(($($output,)+), rest)
            }
        }
    };
}

zip_impl!(P0 p0 o0);
zip_impl!(P0 p0 o0, P1 p1 o1);
zip_impl!(P0 p0 o0, P1 p1 o1, P2 p2 o2);
zip_impl!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3);
zip_impl!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4);
zip_impl!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5);
zip_impl!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5, P6 p6 o6);
zip_impl!(P0 p0 o0, P1 p1 o1, P2 p2 o2, P3 p3 o3, P4 p4 o4, P5 p5 o5, P6 p6 o6, P7 p7 o7);

#[cfg(test)]
mod test {
    use super::zip;
    use crate::{any_char, literal, non_negative_integer, skip_whitespace, ParserExtension};
    use unicomb_core::{Cursor, ParseResult::*, Parser};

    #[test]
    fn pair_collects_both_outputs() {
        let parser = any_char().zip(non_negative_integer());

        assert_eq!(parser.run("x42"), Some(('x', 42)));
    }

    #[test]
    fn seven_members_flatten_into_one_tuple() {
        let parser = zip((
            non_negative_integer(),
            literal("-"),
            non_negative_integer(),
            literal("-"),
            non_negative_integer(),
            skip_whitespace(),
            any_char(),
        ));

        assert_eq!(
            parser.run("2019-09-22 Z"),
            Some((2019, (), 9, (), 22, (), 'Z'))
        );
    }

    #[test]
    fn failing_member_restores_the_start() {
        let parser = zip((literal("a"), literal("b"), literal("c")));
        let input = Cursor::new("abx");

        assert_eq!(parser.parse(input), Fail(input));
    }

    #[test]
    fn single_member_wraps_in_one_tuple() {
        assert_eq!(zip((any_char(),)).run("q"), Some(('q',)));
    }
}
