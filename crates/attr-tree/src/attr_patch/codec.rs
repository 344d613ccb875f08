//! Conversion between patch documents and typed operations.
//!
//! A patch document is an [`AttrList`] of dicts shaped like RFC 6902
//! records: `{"op": "add", "path": "/a/0", "value": ...}`. Paths are
//! written in pointer form and escaped, so keys containing `/` or `~`
//! survive the trip.

use attr_pointer::{format_json_pointer, parse_checked_pointer};
use attr_value::{Attr, AttrDic, AttrList};

use super::types::{Op, Path, PatchError};

// ── Field helpers ─────────────────────────────────────────────────────────

fn decode_path(record: &AttrDic, field: &str) -> Result<Path, PatchError> {
    let pointer = record
        .get(field)
        .and_then(Attr::as_str)
        .ok_or_else(|| PatchError::InvalidOp(format!("\"{field}\" must be a string")))?;
    parse_checked_pointer(pointer).map_err(|e| PatchError::InvalidOp(format!("\"{field}\": {e}")))
}

fn decode_value(record: &AttrDic) -> Result<Attr, PatchError> {
    record
        .get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp("missing \"value\"".into()))
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Decodes one operation record.
pub fn from_attr(record: &Attr) -> Result<Op, PatchError> {
    let record = record
        .as_dic()
        .ok_or_else(|| PatchError::InvalidOp("operation must be a dict".into()))?;
    let name = record
        .get("op")
        .and_then(Attr::as_str)
        .ok_or_else(|| PatchError::InvalidOp("\"op\" must be a string".into()))?;
    let path = decode_path(record, "path")?;
    let op = match name {
        "add" => Op::Add { path, value: decode_value(record)? },
        "remove" => Op::Remove { path },
        "replace" => Op::Replace { path, value: decode_value(record)? },
        "move" => Op::Move { path, from: decode_path(record, "from")? },
        "copy" => Op::Copy { path, from: decode_path(record, "from")? },
        "test" => Op::Test { path, value: decode_value(record)? },
        other => return Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    };
    Ok(op)
}

/// Decodes a whole patch document. Any malformed record rejects the patch.
pub fn from_attr_patch(patch: &AttrList) -> Result<Vec<Op>, PatchError> {
    patch.iter().map(from_attr).collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Encodes one operation as a record.
pub fn to_attr(op: &Op) -> Attr {
    let mut record = AttrDic::new();
    record.set("op", op.op_name());
    record.set("path", format_json_pointer(op.path()));
    match op {
        Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
            record.set("value", value.clone());
        }
        Op::Move { from, .. } | Op::Copy { from, .. } => {
            record.set("from", format_json_pointer(from));
        }
        Op::Remove { .. } => {}
    }
    Attr::Dict(record)
}

pub fn to_attr_patch(ops: &[Op]) -> AttrList {
    ops.iter().map(to_attr).collect()
}
