use unicomb::prelude::*;

#[cfg_attr(test, test)]
pub fn main() {
    println!("----- alternation example -----\n");

    let input = "int x";
    let keyword = || (literal_as("in", "in"), literal_as("int", "int"));

    let (v, rest) = first(keyword()).run_from(input, 0);
    println!("  first: {:?}, rest: {:?}", v, rest);
    assert_eq!(v, Some("in"));

    let (v, rest) = longest(keyword()).run_from(input, 0);
    println!("longest: {:?}, rest: {:?}\n", v, rest);
    assert_eq!(v, Some("int"));
}
