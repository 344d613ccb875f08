//! `attr-patch` — apply a patch to a JSON document.
//!
//! Usage:
//!   attr-patch '<patch-array-json>'
//!
//! The document is read from stdin. Either every operation applies or the
//! document is not written.

use std::io::{self, Read, Write};

use attr_tree::attr_cli::{apply_json_patch, init_tracing, CliError};

fn run(patch: &str) -> Result<(), CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    let result = apply_json_patch(buf.trim(), patch)?;
    let mut out = io::stdout().lock();
    out.write_all(result.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let Some(patch) = args.get(1) else {
        eprintln!("First argument must be a JSON patch array.");
        std::process::exit(1);
    };
    if let Err(e) = run(patch) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
