//! JSON codec for attribute trees.
//!
//! Object → `Dict`, array → `List`, string → `String`, `true`/`false` →
//! `Bool`, `null` → `Empty`. Integral literals become `Int`, or `Long` when
//! they overflow 32 bits; literals with a fraction or exponent become
//! `Double`.
//!
//! # Example
//!
//! ```
//! use attr_pack::json;
//! use attr_value::Attr;
//!
//! let tree = json::decode(r#"{"n": 1, "big": 5000000000, "f": 1.4}"#).unwrap();
//! assert_eq!(tree.get("n"), Some(&Attr::Int(1)));
//! assert_eq!(tree.get("big"), Some(&Attr::Long(5_000_000_000)));
//! assert_eq!(json::encode(&tree), r#"{"n":1,"big":5000000000,"f":1.4}"#);
//! ```

mod decoder;
mod encoder;
mod util;

pub use decoder::{DecodeOptions, JsonDecoder};
pub use encoder::{EncodeOptions, JsonEncoder};

use attr_value::Attr;

use crate::ParseError;

/// Decodes JSON text with default options.
pub fn decode(text: &str) -> Result<Attr, ParseError> {
    JsonDecoder::new().decode(text.as_bytes())
}

/// Decodes UTF-8 JSON bytes with default options.
pub fn decode_bytes(bytes: &[u8]) -> Result<Attr, ParseError> {
    JsonDecoder::new().decode(bytes)
}

/// Encodes compact JSON with default options.
pub fn encode(value: &Attr) -> String {
    JsonEncoder::new().encode(value)
}

/// Encodes compact JSON with the given options.
pub fn encode_with(value: &Attr, options: EncodeOptions) -> String {
    JsonEncoder::with_options(options).encode(value)
}
