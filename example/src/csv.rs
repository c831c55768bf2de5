use std::process::ExitCode;
use unicomb::Parsable;
use unicomb_csv::Table;

/// Parses `text` and prints one line per row.
pub fn print(text: &str) -> ExitCode {
    match text.parse::<Table>() {
        Ok(table) => {
            tracing::debug!(rows = table.len(), "parsed document");
            for (i, row) in table.rows().iter().enumerate() {
                println!("{i}: {row:?}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg_attr(test, test)]
pub fn main() {
    println!("----- csv example -----\n");

    let table = Table::from_literal("one,2,,three\nfive,six,\"hello,q\"");
    for row in table.rows() {
        println!("{:?}", row);
    }
    println!();

    print("a,\"b,c\"");
    assert!("a,b,".parse::<Table>().is_err());
}
