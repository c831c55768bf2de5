use crate::{
    combinator::{Boxed, Discard, First, FlatMap, Map, ZeroOrMore, Zip},
    CommaSeparator,
};
use unicomb_core::Parser;

pub trait ParserExtension: Parser {
    fn map<U, F: Fn(Self::Output) -> U>(self, mapping: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map::new(self, mapping)
    }

    fn flat_map<Q: Parser, F: Fn(Self::Output) -> Q>(self, binding: F) -> FlatMap<Self, F>
    where
        Self: Sized,
    {
        FlatMap::new(self, binding)
    }

    fn zip<P: Parser>(self, other: P) -> Zip<(Self, P)>
    where
        Self: Sized,
    {
        Zip::new((self, other))
    }

    /// `self`, or `other` where `self` does not match.
    fn or<P: Parser<Output = Self::Output>>(self, other: P) -> First<(Self, P)>
    where
        Self: Sized,
    {
        First::new((self, other))
    }

    fn zero_or_more<D: Parser>(self, delimiter: D) -> ZeroOrMore<Self, D>
    where
        Self: Sized,
    {
        ZeroOrMore::new(self, delimiter)
    }

    fn delimited_zero_or_more(self) -> ZeroOrMore<Self, CommaSeparator>
    where
        Self: Sized,
    {
        crate::delimited_zero_or_more(self)
    }

    fn discard(self) -> Discard<Self>
    where
        Self: Sized,
    {
        Discard::new(self)
    }

    fn boxed(self) -> Boxed<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Boxed::new(self)
    }
}

impl<P: Parser> ParserExtension for P {}
