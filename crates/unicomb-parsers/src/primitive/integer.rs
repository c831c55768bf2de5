use unicomb_core::{done, fail, Cursor, ParseResult, Parser};

/// A run of ASCII decimal digits read as a base-10 number.
///
/// Fails without moving when there is no digit, or when the value does not
/// fit into a `u64`.
pub fn non_negative_integer() -> NonNegativeInteger {
    NonNegativeInteger
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeInteger;

impl Parser for NonNegativeInteger {
    type Output = u64;

    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, u64> {
        let mut value: u64 = 0;
        let mut rest = input;

        while let Some((c, next)) = rest.next_char() {
            let Some(digit) = c.to_digit(10) else {
                break;
            };
            value = match value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(v) => v,
                None => return fail(input),
            };
            rest = next;
        }

        if rest.position() == input.position() {
            fail(input)
        } else {
            done(value, rest)
        }
    }
}
