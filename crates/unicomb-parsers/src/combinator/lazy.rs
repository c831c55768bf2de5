use std::sync::OnceLock;
use tracing::debug;
use unicomb_core::{Cursor, ParseResult, Parser};

/// Defers building a parser until it first runs.
///
/// This is how a rule refers to itself: the factory names the rule, and is
/// only called once parsing actually reaches it. The built parser is kept for
/// later runs.
pub fn lazy<F: Fn() -> P, P: Parser>(factory: F) -> Lazy<F, P> {
    Lazy::new(factory)
}

pub struct Lazy<F, P> {
    factory: F,
    parser: OnceLock<P>,
}

impl<F, P> Lazy<F, P> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceLock::new(),
        }
    }
}

impl<F: Fn() -> P, P: Parser> Parser for Lazy<F, P> {
    type Output = P::Output;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, P::Output> {
        self.parser
            .get_or_init(|| {
                debug!(
                    parser = std::any::type_name::<P>(),
                    "building deferred parser"
                );
                (self.factory)()
            })
            .parse(input)
    }
}
