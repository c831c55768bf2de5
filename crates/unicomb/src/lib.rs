//! Backtracking parser combinators over unicode scalars.
//!
//! A [`Parser`] reads from a [`Cursor`] and either yields a value together
//! with the advanced cursor, or reports that nothing matched. Grammars are
//! built bottom-up from the primitives and combinators in [`parsers`], usually
//! through the methods of [`ParserExtension`].

pub use unicomb_core::*;
pub use unicomb_parsers as parsers;
pub use unicomb_parsers::{Parsable, ParserExtension};

pub mod prelude {
    pub use unicomb_core::ParseResult::*;
    pub use unicomb_core::*;
    pub use unicomb_parsers::*;
}
