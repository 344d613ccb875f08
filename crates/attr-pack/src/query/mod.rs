//! URL-query codec with PHP-style bracket nesting.
//!
//! `a[b]=1&a[c][]=2` decodes to `{a: {b: "1", c: ["2"]}}`. Every decoded
//! leaf is a `String`; the encoder flattens a tree back into one pair per
//! leaf.
//!
//! # Example
//!
//! ```
//! use attr_pack::query;
//!
//! let tree = query::decode("test[aaa]=bbb&test[ddd][]=eee").unwrap();
//! assert_eq!(query::encode(&tree), "test[aaa]=bbb&test[ddd][]=eee");
//! ```

mod decoder;
mod encoder;
mod escape;

pub use decoder::{QueryDecoder, QueryOptions};
pub use encoder::QueryEncoder;
pub use escape::{percent_decode, percent_encode};

use attr_value::AttrDic;

use crate::ParseError;

/// Decodes a query string with default options.
pub fn decode(input: &str) -> Result<AttrDic, ParseError> {
    QueryDecoder::new().decode(input)
}

/// Encodes a dict as a query string.
pub fn encode(root: &AttrDic) -> String {
    QueryEncoder.encode(root)
}
