//! Path and reference types.

use attr_value::Attr;

use crate::util::is_valid_index;
use crate::PathError;

/// One token of a path: a dict key or a decimal list index.
pub type PathStep = String;

/// A parsed pointer. The empty path addresses the root.
pub type Path = Vec<PathStep>;

/// How the final step of a path addresses its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKey {
    /// A list position. May equal the list length (one past the end).
    Index(usize),
    /// The `-` token: one past the last list element.
    End,
    /// A dict key.
    Key(String),
}

impl ReferenceKey {
    /// Interprets `step` as a list position.
    ///
    /// `-` is [`ReferenceKey::End`]; anything other than a canonical
    /// decimal fails with [`PathError::InvalidIndex`].
    pub fn from_list_step(step: &str) -> Result<Self, PathError> {
        if step == "-" {
            return Ok(ReferenceKey::End);
        }
        if !is_valid_index(step) {
            return Err(PathError::InvalidIndex);
        }
        step.parse()
            .map(ReferenceKey::Index)
            .map_err(|_| PathError::InvalidIndex)
    }

    /// Interprets `step` against `container`.
    pub fn resolve(container: &Attr, step: &str) -> Result<Self, PathError> {
        match container {
            Attr::List(_) => Self::from_list_step(step),
            Attr::Dict(_) => Ok(ReferenceKey::Key(step.to_string())),
            _ => Err(PathError::NotAContainer),
        }
    }
}

/// The outcome of [`find`](crate::find): the addressed value, if present,
/// together with the container and key that address it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference<'a> {
    /// The target value. `None` if the container has no such key or index.
    pub val: Option<&'a Attr>,
    /// The container holding the target. `None` for the root.
    pub obj: Option<&'a Attr>,
    pub key: Option<ReferenceKey>,
}

impl Reference<'_> {
    /// True when the reference points one past the end of a list, where
    /// an insertion is still in range.
    pub fn is_list_end(&self) -> bool {
        match (self.obj, &self.key) {
            (Some(Attr::List(_)), Some(ReferenceKey::End)) => true,
            (Some(Attr::List(list)), Some(ReferenceKey::Index(i))) => *i == list.len(),
            _ => false,
        }
    }
}
