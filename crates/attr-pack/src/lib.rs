//! Text codecs for attribute trees.
//!
//! - [`json`] — standard JSON to and from [`Attr`](attr_value::Attr).
//! - [`query`] — `application/x-www-form-urlencoded` pairs with PHP-style
//!   bracket nesting (`a[b][]=c`) to and from a root
//!   [`AttrDic`](attr_value::AttrDic).
//!
//! Both decoders are all-or-nothing: malformed input yields a
//! [`ParseError`] and no partial tree.

mod error;

pub mod json;
pub mod query;

pub use error::ParseError;
pub use json::{DecodeOptions, EncodeOptions, JsonDecoder, JsonEncoder};
pub use query::{QueryDecoder, QueryEncoder, QueryOptions};
