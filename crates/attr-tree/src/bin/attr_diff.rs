//! `attr-diff` — print the patch that turns one JSON document into another.
//!
//! Usage:
//!   attr-diff '<target-json>'
//!
//! The source document is read from stdin.

use std::io::{self, Read, Write};

use attr_tree::attr_cli::{diff_json, init_tracing, CliError};

fn run(target: &str) -> Result<(), CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    let result = diff_json(buf.trim(), target)?;
    let mut out = io::stdout().lock();
    out.write_all(result.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let Some(target) = args.get(1) else {
        eprintln!("First argument must be the target JSON document.");
        std::process::exit(1);
    };
    if let Err(e) = run(target) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
