//! Patch engine: RFC 6902 style operations over attribute trees.
//!
//! Supported operations: `add`, `remove`, `replace`, `move`, `copy`,
//! `test`. Paths are JSON-Pointer-like (`/a/0/b`, `""` for the root).
//!
//! Operations run eagerly and in order. When one fails, the ones before it
//! stay applied; use [`ApplyPatchOptions`] with `mutate: false` for an
//! all-or-nothing apply.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::{from_attr, from_attr_patch, to_attr, to_attr_patch};
pub use types::{ApplyPatchOptions, Op, PatchError, Path};
