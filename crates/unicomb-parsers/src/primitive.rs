pub mod any_char;
pub mod constant;
pub mod integer;
pub mod literal;
pub mod until;
pub mod whitespace;

pub use any_char::{any_char, AnyChar};
pub use constant::{always, never, no_delimiter, Always, Never};
pub use integer::{non_negative_integer, NonNegativeInteger};
pub use literal::{first_literal, literal, literal_as, longest_literal, Literal};
pub use until::{characters_until, CharactersUntil};
pub use whitespace::{skip_whitespace, SkipWhitespace};
