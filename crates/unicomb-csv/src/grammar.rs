use unicomb::prelude::*;

/// `"` text `"`, yielding the text between the quotes.
pub fn quoted_field() -> impl Parser<Output = String> {
    zip((literal("\""), characters_until(literal("\"")), literal("\"")))
        .map(|((), text, ())| text)
}

/// Text up to the next `,` or `\n`; may be empty.
pub fn plain_field() -> impl Parser<Output = String> {
    characters_until(first_literal([",", "\n"], ()))
}

/// A quoted or a plain field. The quoted form is tried first, so a leading `"`
/// always opens a quoted field when a closing one follows.
///
/// A field never starts at the end of the input, so a trailing comma is not
/// read as one more, empty, field.
pub fn field() -> impl Parser<Output = String> {
    zip((from_fn(not_at_end), first((quoted_field(), plain_field())))).map(|((), text)| text)
}

/// Fields of one row.
pub fn line() -> impl Parser<Output = Vec<String>> {
    delimited_zero_or_more(field())
}

/// Rows separated by `\n`.
pub fn document() -> impl Parser<Output = Vec<Vec<String>>> {
    zero_or_more(line(), literal("\n"))
}

fn not_at_end(input: Cursor<'_>) -> ParseResult<'_, ()> {
    if input.is_empty() {
        fail(input)
    } else {
        done((), input)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        assert_eq!(field().run("\"a,b\""), Some("a,b".to_string()));
    }

    #[test]
    fn quoted_field_keeps_embedded_newline() {
        assert_eq!(
            quoted_field().run("\"two\nlines\""),
            Some("two\nlines".to_string())
        );
    }

    #[test]
    fn unterminated_quote_falls_back_to_plain_text() {
        let input = Cursor::new("\"open,x");

        assert_eq!(quoted_field().parse(input), Fail(input));
        assert_eq!(
            field().run_from("\"open,x", 0),
            (Some("\"open".to_string()), ",x")
        );
    }

    #[test]
    fn plain_field_stops_at_comma_or_newline() {
        assert_eq!(
            plain_field().run_from("ab,c", 0),
            (Some("ab".to_string()), ",c")
        );
        assert_eq!(
            plain_field().run_from("ab\nc", 0),
            (Some("ab".to_string()), "\nc")
        );
    }

    #[test]
    fn line_leaves_a_trailing_comma_unconsumed() {
        assert_eq!(
            line().run_from("a,b,", 0),
            (Some(vec!["a".to_string(), "b".to_string()]), ",")
        );
    }

    #[test]
    fn line_keeps_empty_fields_between_commas() {
        assert_eq!(
            line().run("one,2,,three"),
            Some(vec![
                "one".to_string(),
                "2".to_string(),
                String::new(),
                "three".to_string()
            ])
        );
    }

    #[test]
    fn line_stops_at_newline() {
        let (fields, rest) = line().run_from("x,y\nz", 0);

        assert_eq!(fields, Some(vec!["x".to_string(), "y".to_string()]));
        assert_eq!(rest, "\nz");
    }

    #[test]
    fn document_reads_rows() {
        assert_eq!(
            document().run("one,2,,three\nfive,six,\"hello,q\""),
            Some(vec![
                vec!["one", "2", "", "three"],
                vec!["five", "six", "hello,q"],
            ]
            .into_iter()
            .map(|row| row.into_iter().map(String::from).collect::<Vec<_>>())
            .collect())
        );
    }

    #[test]
    fn document_rejects_trailing_garbage() {
        assert_eq!(document().run("a,b,"), None);
        assert_eq!(document().run("\"a\"b"), None);
    }

    #[test]
    fn grammar_values_are_reusable() {
        let parser = document();
        let input = "\"o,ne\",\"qu,ote\",, two";

        assert_eq!(parser.run(input), parser.run(input));
    }
}
