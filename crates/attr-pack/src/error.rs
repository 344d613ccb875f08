//! Decoder error type shared by the JSON and query codecs.

use thiserror::Error;

/// Error returned when text cannot be decoded into an attribute tree.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    #[error("unexpected character at byte {0}")]
    Unexpected(usize),
    #[error("invalid number at byte {0}")]
    InvalidNumber(usize),
    #[error("invalid escape sequence in string starting at byte {0}")]
    InvalidEscape(usize),
    #[error("unescaped control character in string at byte {0}")]
    ControlCharacter(usize),
    #[error("invalid UTF-8 at byte {0}")]
    InvalidUtf8(usize),
    #[error("trailing characters at byte {0}")]
    TrailingCharacters(usize),
    #[error("nesting exceeds {0} levels")]
    TooDeep(usize),
    #[error("unclosed '[' in query key at byte {0}")]
    UnclosedBracket(usize),
    #[error("expected '[' in query key at byte {0}")]
    MisplacedBracket(usize),
}
