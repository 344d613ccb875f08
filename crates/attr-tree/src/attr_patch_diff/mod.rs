//! Positional tree diff producing patch operations.
//!
//! The diff walks both trees in lockstep:
//!
//! - unequal scalars, or values of different kinds, become one `replace`;
//! - dicts yield `add` for new keys, `remove` for dropped keys, then recurse
//!   into shared keys;
//! - lists recurse index by index over the shared prefix, then `add` the
//!   trailing extra elements in ascending order or `remove` the surplus in
//!   descending order, so no removal shifts a position still to be removed.
//!
//! Lists are not aligned: an element inserted in the middle shows up as a
//! run of replacements followed by an `add` at the end.

use attr_value::{Attr, AttrDic, AttrList};

use crate::attr_patch::Op;

// ── Public API ────────────────────────────────────────────────────────────

/// Generates operations that transform `src` into `dst`.
///
/// Applying the result to a copy of `src` always succeeds and yields a tree
/// equal to `dst`. Equal inputs produce no operations.
pub fn diff(src: &Attr, dst: &Attr) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut path = Vec::new();
    diff_at_path(&mut ops, &mut path, src, dst);
    ops
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_at_path(ops: &mut Vec<Op>, path: &mut Vec<String>, src: &Attr, dst: &Attr) {
    if src == dst {
        return;
    }
    match (src, dst) {
        (Attr::Dict(s), Attr::Dict(d)) => diff_dic(ops, path, s, d),
        (Attr::List(s), Attr::List(d)) => diff_list(ops, path, s, d),
        _ => ops.push(Op::Replace {
            path: path.clone(),
            value: dst.clone(),
        }),
    }
}

fn child_path(path: &[String], step: impl Into<String>) -> Vec<String> {
    let mut p = path.to_vec();
    p.push(step.into());
    p
}

fn diff_dic(ops: &mut Vec<Op>, path: &mut Vec<String>, src: &AttrDic, dst: &AttrDic) {
    for (key, value) in dst {
        if !src.contains_key(key) {
            ops.push(Op::Add {
                path: child_path(path, key.as_str()),
                value: value.clone(),
            });
        }
    }
    for key in src.keys() {
        if !dst.contains_key(key) {
            ops.push(Op::Remove {
                path: child_path(path, key),
            });
        }
    }
    for (key, dst_val) in dst {
        if let Some(src_val) = src.get(key) {
            path.push(key.clone());
            diff_at_path(ops, path, src_val, dst_val);
            path.pop();
        }
    }
}

fn diff_list(ops: &mut Vec<Op>, path: &mut Vec<String>, src: &AttrList, dst: &AttrList) {
    let shared = src.len().min(dst.len());
    for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
        path.push(i.to_string());
        diff_at_path(ops, path, s, d);
        path.pop();
    }
    for (i, value) in dst.iter().enumerate().skip(shared) {
        ops.push(Op::Add {
            path: child_path(path, i.to_string()),
            value: value.clone(),
        });
    }
    for i in (shared..src.len()).rev() {
        ops.push(Op::Remove {
            path: child_path(path, i.to_string()),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
