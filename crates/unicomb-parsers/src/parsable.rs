use crate::non_negative_integer;
use unicomb_core::Parser;

/// A type with a canonical grammar, which can therefore be built from text.
pub trait Parsable: Sized {
    fn parser() -> impl Parser<Output = Self>;

    /// Parses the whole of `text`.
    fn parse(text: &str) -> Option<Self> {
        Self::parser().run(text)
    }

    /// Builds a value from a literal written in source code.
    ///
    /// A literal that does not parse is a bug in the calling code, so this
    /// panics instead of returning an error.
    fn from_literal(literal: &str) -> Self {
        match Self::parse(literal) {
            Some(v) => v,
            None => panic!(
                "{:?} is not a valid `{}` literal.",
                literal,
                std::any::type_name::<Self>()
            ),
        }
    }
}

impl Parsable for u64 {
    fn parser() -> impl Parser<Output = Self> {
        non_negative_integer()
    }
}
