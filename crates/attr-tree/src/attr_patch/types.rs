//! Core types for the patch engine.

use attr_pointer::PathError;
use attr_value::Attr;
use thiserror::Error;

pub use attr_pointer::Path;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("test operation failed: value mismatch")]
    Test,
    #[error("invalid operation: {0}")]
    InvalidOp(String),
}

/// A single patch operation with decoded paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Add { path: Path, value: Attr },
    Remove { path: Path },
    Replace { path: Path, value: Attr },
    Move { path: Path, from: Path },
    Copy { path: Path, from: Path },
    Test { path: Path, value: Attr },
}

impl Op {
    /// The wire name, as written in the `op` field.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
            Op::Test { .. } => "test",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// The source path of `move` and `copy`.
    pub fn from_path(&self) -> Option<&Path> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyPatchOptions {
    /// Apply in place as operations succeed. When `false`, the patch runs
    /// against a copy that replaces the document only if every operation
    /// succeeds.
    pub mutate: bool,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self { mutate: true }
    }
}
