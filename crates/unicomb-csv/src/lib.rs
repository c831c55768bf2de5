//! Comma-separated values, read with a grammar assembled from `unicomb`
//! combinators.
//!
//! Fields are separated by `,` (whitespace after a comma is skipped) and rows
//! by `\n`. A field wrapped in double quotes may contain commas and newlines;
//! there is no escape for a quote inside a quoted field.

mod grammar;
mod table;

pub use grammar::{document, field, line, plain_field, quoted_field};
pub use table::{NoMatch, Table};
