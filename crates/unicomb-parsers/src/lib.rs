pub mod combinator;
pub mod primitive;

mod extension;
mod parsable;

pub use combinator::*;
pub use extension::ParserExtension;
pub use parsable::Parsable;
pub use primitive::*;
