use unicomb::prelude::*;

#[cfg_attr(test, test)]
pub fn main() {
    println!("----- repeat example -----\n");

    let parser = literal("text").map(|()| "text").zero_or_more(no_delimiter());
    let input = "texttexttextaaaa";

    match parser.run_from(input, 0) {
        (Some(v), rest) => {
            println!("result: {:?}", v);
            println!("  rest: {}", rest)
        }
        (None, _) => unreachable!(),
    }

    let numbers = non_negative_integer().delimited_zero_or_more();
    let input = "1, 2,3 ,4";

    match numbers.parse(Cursor::new(input)) {
        Done(v, r) => {
            println!("result: {:?}", v);
            println!("  rest: {}\n", r.remaining())
        }
        Fail(_) => unreachable!(),
    }
}
