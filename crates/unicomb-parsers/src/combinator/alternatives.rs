use unicomb_core::{Cursor, ParseResult, Parser};

/// An ordered list of candidate parsers sharing one output type.
///
/// Implemented for tuples of up to eight parsers, for arrays and for vectors.
pub trait Alternatives {
    type Output;

    /// Runs the candidate at `index`, or returns `None` past the last one.
    fn attempt<'a>(&self, index: usize, input: Cursor<'a>)
        -> Option<ParseResult<'a, Self::Output>>;
}

impl<P: Parser> Alternatives for Vec<P> {
    type Output = P::Output;

    fn attempt<'a>(
        &self,
        index: usize,
        input: Cursor<'a>,
    ) -> Option<ParseResult<'a, Self::Output>> {
        self.get(index).map(|parser| parser.parse(input))
    }
}

impl<P: Parser, const N: usize> Alternatives for [P; N] {
    type Output = P::Output;

    fn attempt<'a>(
        &self,
        index: usize,
        input: Cursor<'a>,
    ) -> Option<ParseResult<'a, Self::Output>> {
        self.get(index).map(|parser| parser.parse(input))
    }
}

macro_rules! alternatives_impl {
    ($head:ident $head_index:tt $(, $p:ident $index:tt)*) => {
        impl<$head: Parser, $($p: Parser<Output = $head::Output>),*> Alternatives for ($head, $($p,)*) {
            type Output = $head::Output;

            fn attempt<'a>(
                &self,
                index: usize,
                input: Cursor<'a>,
            ) -> Option<ParseResult<'a, Self::Output>> {
                match index {
                    $head_index => Some(self.$head_index.parse(input)),
                    $($index => Some(self.$index.parse(input)),)*
                    _ => None,
                }
            }
        }
    };
}

alternatives_impl!(P0 0);
alternatives_impl!(P0 0, P1 1);
alternatives_impl!(P0 0, P1 1, P2 2);
alternatives_impl!(P0 0, P1 1, P2 2, P3 3);
alternatives_impl!(P0 0, P1 1, P2 2, P3 3, P4 4);
alternatives_impl!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
alternatives_impl!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
alternatives_impl!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);
