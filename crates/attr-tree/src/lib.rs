//! attr-tree — structured attribute trees with codecs, patching and diffing.
//!
//! The tree itself lives in [`attr_value`]; the codecs in [`attr_pack`];
//! path handling in [`attr_pointer`]. This crate adds the patch engine,
//! the diff engine, and the small surface most callers need:
//!
//! - [`parse_json`] / [`serialize_json`]
//! - [`parse_query`] / [`serialize_query`]
//! - [`diff`] and [`apply`]
//!
//! # Example
//!
//! ```
//! let from = attr_tree::parse_json(r#"{"hp": 10, "items": ["sword", "shield"]}"#).unwrap();
//! let to = attr_tree::parse_json(r#"{"hp": 7, "items": ["sword"]}"#).unwrap();
//!
//! let patch = attr_tree::diff(&from, &to);
//! assert_eq!(
//!     attr_tree::serialize_json(&patch.clone().into()),
//!     r#"[{"op":"replace","path":"/hp","value":7},{"op":"remove","path":"/items/1"}]"#
//! );
//!
//! let mut doc = from.clone();
//! assert!(attr_tree::apply(&mut doc, &patch));
//! assert_eq!(doc, to);
//! ```

pub mod attr_cli;
pub mod attr_patch;
pub mod attr_patch_diff;

pub use attr_pack::ParseError;
pub use attr_patch::{Op, PatchError};
pub use attr_value::{Attr, AttrDic, AttrKind, AttrList};

/// Parses JSON text into a tree.
pub fn parse_json(text: &str) -> Result<Attr, ParseError> {
    attr_pack::json::decode(text)
}

/// Serializes a tree as compact JSON.
pub fn serialize_json(tree: &Attr) -> String {
    attr_pack::json::encode(tree)
}

/// Parses a bracket-notation query string into a dict.
pub fn parse_query(text: &str) -> Result<AttrDic, ParseError> {
    attr_pack::query::decode(text)
}

pub fn serialize_query(tree: &AttrDic) -> String {
    attr_pack::query::encode(tree)
}

/// Computes the patch document turning `from` into `to`.
pub fn diff(from: &Attr, to: &Attr) -> AttrList {
    attr_patch::to_attr_patch(&attr_patch_diff::diff(from, to))
}

/// Applies a patch document in place, returning whether every operation
/// succeeded.
///
/// Operations that ran before a failure stay applied. Clone `tree` first
/// if the old state must survive a failed patch.
pub fn apply(tree: &mut Attr, patch: &AttrList) -> bool {
    try_apply(tree, patch).is_ok()
}

/// [`apply`] with the failure reason.
///
/// A malformed record anywhere in `patch` is reported before any
/// operation runs.
pub fn try_apply(tree: &mut Attr, patch: &AttrList) -> Result<(), PatchError> {
    let ops = attr_patch::from_attr_patch(patch)?;
    attr_patch::apply_ops(tree, &ops)
}
