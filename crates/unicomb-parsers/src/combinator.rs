pub mod alternatives;
pub mod boxed;
pub mod discard;
pub mod first;
pub mod flat_map;
pub mod lazy;
pub mod longest;
pub mod map;
pub mod repeat;
pub mod zip;

pub use alternatives::Alternatives;
pub use boxed::Boxed;
pub use discard::Discard;
pub use first::{first, First};
pub use flat_map::FlatMap;
pub use lazy::{lazy, Lazy};
pub use longest::{longest, Longest};
pub use map::Map;
pub use repeat::{comma_separator, delimited_zero_or_more, zero_or_more, CommaSeparator, ZeroOrMore};
pub use zip::{zip, Zip};
