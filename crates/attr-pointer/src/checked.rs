//! Checked parsing for pointer text that arrives from outside, such as the
//! `path` and `from` fields of a patch document.

use thiserror::Error;

use crate::types::Path;
use crate::util::parse_json_pointer;

/// Longest pointer text accepted, in bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer must be empty or start with '/'")]
    MissingSlash,
    #[error("pointer is {0} bytes, limit is {MAX_POINTER_LENGTH}")]
    TooLong(usize),
}

/// Parses `pointer`, which must be `""` or start with `/` and fit within
/// [`MAX_POINTER_LENGTH`].
///
/// ```
/// use attr_pointer::{parse_checked_pointer, PointerError};
///
/// assert_eq!(parse_checked_pointer(""), Ok(vec![]));
/// assert_eq!(parse_checked_pointer("/a/0"), Ok(vec!["a".to_string(), "0".to_string()]));
/// assert_eq!(parse_checked_pointer("a/0"), Err(PointerError::MissingSlash));
/// ```
pub fn parse_checked_pointer(pointer: &str) -> Result<Path, PointerError> {
    if !pointer.is_empty() && !pointer.starts_with('/') {
        return Err(PointerError::MissingSlash);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PointerError::TooLong(pointer.len()));
    }
    Ok(parse_json_pointer(pointer))
}
