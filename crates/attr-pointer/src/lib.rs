//! JSON-Pointer-style paths over attribute trees.
//!
//! A pointer is `""` (the root) or a sequence of `/`-prefixed steps, with
//! `~` and `/` inside a step written as `~0` and `~1`. A step addresses a
//! dict by key and a list by canonical decimal index; `-` names the slot
//! after the last list element.
//!
//! # Example
//!
//! ```
//! use attr_pointer::{find_value, format_json_pointer, parse_json_pointer};
//! use attr_value::{Attr, AttrDic};
//!
//! let path = parse_json_pointer("/player/a~1b");
//! assert_eq!(path, vec!["player".to_string(), "a/b".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/player/a~1b");
//!
//! let mut inner = AttrDic::new();
//! inner.set("a/b", 42);
//! let mut outer = AttrDic::new();
//! outer.set("player", inner);
//! let doc = Attr::from(outer);
//! assert_eq!(find_value(&doc, &path), Ok(&Attr::Int(42)));
//! ```

use thiserror::Error;

mod checked;
mod find;
pub mod types;
mod util;

pub use checked::{parse_checked_pointer, PointerError, MAX_POINTER_LENGTH};
pub use find::{find, find_parent_mut, find_value};
pub use types::{Path, PathStep, Reference, ReferenceKey};
pub use util::{
    escape_component, format_json_pointer, is_child, is_valid_index, parse_json_pointer,
    unescape_component,
};

/// Failure to resolve a path against a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path not found")]
    NotFound,
    #[error("invalid list index")]
    InvalidIndex,
    #[error("cannot descend into a scalar")]
    NotAContainer,
    #[error("root has no parent")]
    NoParent,
}
