//! Attribute tree value model.
//!
//! An attribute tree is a dynamically-typed document, close to a JSON value
//! but with distinct numeric widths. Every node is an [`Attr`]; the two
//! container variants hold an [`AttrList`] (ordered, index-addressed) or an
//! [`AttrDic`] (string-keyed).
//!
//! # Example
//!
//! ```
//! use attr_value::{Attr, AttrDic, AttrList};
//!
//! let mut scores = AttrList::new();
//! scores.push(10);
//! scores.push(20);
//!
//! let mut player = AttrDic::new();
//! player.set("name", "ada");
//! player.set("scores", scores);
//!
//! let tree = Attr::from(player);
//! assert_eq!(tree.get("name").and_then(Attr::as_str), Some("ada"));
//! assert_eq!(tree.get("scores").and_then(|s| s.at(1)).map(Attr::as_int), Some(20));
//! ```

mod attr;
mod convert;
mod dic;
mod list;

pub use attr::{Attr, AttrKind};
pub use dic::AttrDic;
pub use list::AttrList;
