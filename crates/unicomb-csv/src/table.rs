use crate::grammar::document;
use std::str::FromStr;
use thiserror::Error;
use unicomb::{Parsable, Parser, ParserExtension};

/// Rows of fields, in input order. No header row and no column types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

impl Parsable for Table {
    fn parser() -> impl Parser<Output = Self> {
        document().map(Table::new)
    }
}

/// The text is not a CSV document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the input is not a CSV document")]
pub struct NoMatch;

impl FromStr for Table {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as Parsable>::parse(s).ok_or(NoMatch)
    }
}

#[cfg(test)]
mod test {
    use super::{NoMatch, Table};
    use unicomb::Parsable;

    struct Case {
        name: &'static str,
        input: &'static str,
        expected: Vec<Vec<&'static str>>,
    }

    fn cases() -> Vec<Case> {
        vec![
            Case {
                name: "field",
                input: "\"o,ne\",\"qu,ote\",, two",
                expected: vec![vec!["o,ne", "qu,ote", "", "two"]],
            },
            Case {
                name: "line",
                input: "one,2,,three",
                expected: vec![vec!["one", "2", "", "three"]],
            },
            Case {
                name: "multiple_lines",
                input: "one,2,,three\nfive,six,\"hello,q\"",
                expected: vec![
                    vec!["one", "2", "", "three"],
                    vec!["five", "six", "hello,q"],
                ],
            },
            Case {
                name: "quotes",
                input: "one,\"qu,ote\",2,,three",
                expected: vec![vec!["one", "qu,ote", "2", "", "three"]],
            },
            Case {
                name: "quoted_newline",
                input: "\"a\nb\",c\nd",
                expected: vec![vec!["a\nb", "c"], vec!["d"]],
            },
        ]
    }

    #[test]
    fn parses_every_case() {
        for case in cases() {
            let table = Table::parse(case.input);

            assert_eq!(
                table.map(Table::into_rows),
                Some(
                    case.expected
                        .iter()
                        .map(|row| row.iter().map(|f| f.to_string()).collect())
                        .collect()
                ),
                "case {} failed",
                case.name
            );
        }
    }

    #[test]
    fn from_str_reports_no_match() {
        assert_eq!("a,b,".parse::<Table>(), Err(NoMatch));
        assert_eq!(NoMatch.to_string(), "the input is not a CSV document");
    }

    #[test]
    fn from_str_matches_parse() {
        let input = "x, y\nz";

        assert_eq!(input.parse::<Table>().ok(), Table::parse(input));
    }

    #[test]
    fn trailing_newline_adds_an_empty_row() {
        let table = Table::from_literal("a,b\n");

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec!["a", "b"]);
        assert!(table.rows()[1].is_empty());
    }

    #[test]
    fn empty_input_is_one_empty_row() {
        let table = Table::from_literal("");

        assert_eq!(table, Table::new(vec![vec![]]));
        assert!(!table.is_empty());
    }

    #[test]
    #[should_panic]
    fn malformed_literal_panics() {
        Table::from_literal("\"x\"y");
    }
}
