//! Command-line glue for the `attr-*` binaries.
//!
//! - `attr-patch` — apply a patch to a JSON document
//! - `attr-diff`  — print the patch between two JSON documents
//! - `attr-query` — convert a query string to JSON and back
//!
//! Each function takes and returns text so the binaries stay thin.

use std::sync::Once;

use attr_pack::{json, query, ParseError};
use attr_value::Attr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::attr_patch::{apply_patch, from_attr_patch, to_attr_patch, ApplyPatchOptions, PatchError};
use crate::attr_patch_diff::diff;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Patch(#[from] PatchError),
    #[error("patch must be a JSON array of operations")]
    PatchNotList,
    #[error("query input must be a JSON object")]
    QueryNotDict,
    #[error("unknown mode: {0} (expected \"decode\" or \"encode\")")]
    UnknownMode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ── Logging ───────────────────────────────────────────────────────────────

static TRACING_INIT: Once = Once::new();

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, defaulting
/// to `warn`. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();
        let _ = subscriber.try_init();
    });
}

// ── attr-patch ────────────────────────────────────────────────────────────

/// Applies `patch_json` to `doc_json` atomically and returns the new
/// document as compact JSON.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let mut doc = json::decode(doc_json)?;
    let patch = match json::decode(patch_json)? {
        Attr::List(list) => list,
        _ => return Err(CliError::PatchNotList),
    };
    let ops = from_attr_patch(&patch)?;
    apply_patch(&mut doc, &ops, &ApplyPatchOptions { mutate: false })?;
    Ok(json::encode(&doc))
}

// ── attr-diff ─────────────────────────────────────────────────────────────

/// Returns the patch turning `src_json` into `dst_json`, as a JSON array.
pub fn diff_json(src_json: &str, dst_json: &str) -> Result<String, CliError> {
    let src = json::decode(src_json)?;
    let dst = json::decode(dst_json)?;
    let patch = to_attr_patch(&diff(&src, &dst));
    Ok(json::encode(&Attr::List(patch)))
}

// ── attr-query ────────────────────────────────────────────────────────────

pub fn query_to_json(input: &str) -> Result<String, CliError> {
    let tree = query::decode(input)?;
    Ok(json::encode(&Attr::Dict(tree)))
}

pub fn json_to_query(input: &str) -> Result<String, CliError> {
    match json::decode(input)? {
        Attr::Dict(tree) => Ok(query::encode(&tree)),
        _ => Err(CliError::QueryNotDict),
    }
}

/// Dispatches on `"decode"` (query to JSON) or `"encode"` (JSON to query).
pub fn convert_query(mode: &str, input: &str) -> Result<String, CliError> {
    match mode {
        "decode" => query_to_json(input),
        "encode" => json_to_query(input),
        other => Err(CliError::UnknownMode(other.to_string())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
