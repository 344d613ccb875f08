//! `attr-query` — convert between query strings and JSON.
//!
//! Usage:
//!   attr-query decode   < query.txt   # prints JSON
//!   attr-query encode   < doc.json    # prints a query string

use std::io::{self, Read, Write};

use attr_tree::attr_cli::{convert_query, init_tracing, CliError};

fn run(mode: &str) -> Result<(), CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    let result = convert_query(mode, buf.trim())?;
    let mut out = io::stdout().lock();
    out.write_all(result.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let Some(mode) = args.get(1) else {
        eprintln!("First argument must be \"decode\" or \"encode\".");
        std::process::exit(1);
    };
    if let Err(e) = run(mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
