//! [`Attr`] — the node type of an attribute tree.

use std::hash::{Hash, Hasher};

use crate::{AttrDic, AttrList};

/// A single attribute tree node.
///
/// Exactly one variant is active at a time. Numeric variants are distinct:
/// an `Int(1)` is not equal to a `Long(1)` and nothing widens on store.
/// Conversions happen only through the coercing `as_*` readers.
///
/// Equality and hashing are structural. Floating-point payloads compare by
/// bit pattern so that `Eq` and `Hash` agree (`NaN == NaN`, `0.0 != -0.0`).
#[derive(Debug, Clone, Default)]
pub enum Attr {
    #[default]
    Empty,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(AttrList),
    Dict(AttrDic),
}

/// The variant tag of an [`Attr`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    Empty,
    Bool,
    Int,
    Long,
    Float,
    Double,
    String,
    List,
    Dict,
}

impl AttrKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttrKind::Empty => "empty",
            AttrKind::Bool => "bool",
            AttrKind::Int => "int",
            AttrKind::Long => "long",
            AttrKind::Float => "float",
            AttrKind::Double => "double",
            AttrKind::String => "string",
            AttrKind::List => "list",
            AttrKind::Dict => "dict",
        }
    }
}

enum Numeric {
    Integral(i64),
    Real(f64),
}

fn parse_numeric(s: &str) -> Option<Numeric> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(Numeric::Integral(i));
    }
    s.parse::<f64>().ok().map(Numeric::Real)
}

impl Attr {
    /// A fresh empty list node.
    pub fn new_list() -> Self {
        Attr::List(AttrList::new())
    }

    /// A fresh empty dict node.
    pub fn new_dic() -> Self {
        Attr::Dict(AttrDic::new())
    }

    pub fn kind(&self) -> AttrKind {
        match self {
            Attr::Empty => AttrKind::Empty,
            Attr::Bool(_) => AttrKind::Bool,
            Attr::Int(_) => AttrKind::Int,
            Attr::Long(_) => AttrKind::Long,
            Attr::Float(_) => AttrKind::Float,
            Attr::Double(_) => AttrKind::Double,
            Attr::String(_) => AttrKind::String,
            Attr::List(_) => AttrKind::List,
            Attr::Dict(_) => AttrKind::Dict,
        }
    }

    pub fn is_empty_value(&self) -> bool {
        matches!(self, Attr::Empty)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Attr::List(_) | Attr::Dict(_))
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    // ── Borrowing views ───────────────────────────────────────────────────

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&AttrList> {
        match self {
            Attr::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut AttrList> {
        match self {
            Attr::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_dic(&self) -> Option<&AttrDic> {
        match self {
            Attr::Dict(dic) => Some(dic),
            _ => None,
        }
    }

    pub fn as_dic_mut(&mut self) -> Option<&mut AttrDic> {
        match self {
            Attr::Dict(dic) => Some(dic),
            _ => None,
        }
    }

    /// Looks up `key` when this node is a dict.
    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.as_dic().and_then(|dic| dic.get(key))
    }

    /// Looks up position `index` when this node is a list.
    pub fn at(&self, index: usize) -> Option<&Attr> {
        self.as_list().and_then(|list| list.get(index))
    }

    // ── Coercing readers ──────────────────────────────────────────────────

    /// Reads the node as a boolean.
    ///
    /// Numbers are true when non-zero; strings are true for `"true"` (any
    /// case) and `"1"`. Everything else is false.
    pub fn as_bool(&self) -> bool {
        match self {
            Attr::Bool(b) => *b,
            Attr::Int(i) => *i != 0,
            Attr::Long(l) => *l != 0,
            Attr::Float(f) => *f != 0.0,
            Attr::Double(d) => *d != 0.0,
            Attr::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
            Attr::Empty | Attr::List(_) | Attr::Dict(_) => false,
        }
    }

    /// Reads the node as a 64-bit integer, truncating fractions.
    pub fn as_long(&self) -> i64 {
        match self {
            Attr::Bool(b) => i64::from(*b),
            Attr::Int(i) => i64::from(*i),
            Attr::Long(l) => *l,
            Attr::Float(f) => *f as i64,
            Attr::Double(d) => *d as i64,
            Attr::String(s) => match parse_numeric(s) {
                Some(Numeric::Integral(i)) => i,
                Some(Numeric::Real(f)) => f as i64,
                None => 0,
            },
            Attr::Empty | Attr::List(_) | Attr::Dict(_) => 0,
        }
    }

    /// Reads the node as a 32-bit integer, truncating fractions.
    ///
    /// A `Long` outside the `i32` range wraps; floating values saturate.
    pub fn as_int(&self) -> i32 {
        match self {
            Attr::Float(f) => *f as i32,
            Attr::Double(d) => *d as i32,
            Attr::String(s) => match parse_numeric(s) {
                Some(Numeric::Real(f)) => f as i32,
                Some(Numeric::Integral(i)) => i as i32,
                None => 0,
            },
            other => other.as_long() as i32,
        }
    }

    pub fn as_double(&self) -> f64 {
        match self {
            Attr::Bool(b) => f64::from(u8::from(*b)),
            Attr::Int(i) => f64::from(*i),
            Attr::Long(l) => *l as f64,
            Attr::Float(f) => f64::from(*f),
            Attr::Double(d) => *d,
            Attr::String(s) => match parse_numeric(s) {
                Some(Numeric::Integral(i)) => i as f64,
                Some(Numeric::Real(f)) => f,
                None => 0.0,
            },
            Attr::Empty | Attr::List(_) | Attr::Dict(_) => 0.0,
        }
    }

    pub fn as_float(&self) -> f32 {
        match self {
            Attr::Float(f) => *f,
            other => other.as_double() as f32,
        }
    }

    /// Renders a scalar as plain text. `Empty` and containers give `""`.
    pub fn to_text(&self) -> String {
        match self {
            Attr::Empty | Attr::List(_) | Attr::Dict(_) => String::new(),
            Attr::Bool(b) => b.to_string(),
            Attr::Int(i) => i.to_string(),
            Attr::Long(l) => l.to_string(),
            Attr::Float(f) => f.to_string(),
            Attr::Double(d) => d.to_string(),
            Attr::String(s) => s.clone(),
        }
    }
}

impl PartialEq for Attr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Attr::Empty, Attr::Empty) => true,
            (Attr::Bool(a), Attr::Bool(b)) => a == b,
            (Attr::Int(a), Attr::Int(b)) => a == b,
            (Attr::Long(a), Attr::Long(b)) => a == b,
            (Attr::Float(a), Attr::Float(b)) => a.to_bits() == b.to_bits(),
            (Attr::Double(a), Attr::Double(b)) => a.to_bits() == b.to_bits(),
            (Attr::String(a), Attr::String(b)) => a == b,
            (Attr::List(a), Attr::List(b)) => a == b,
            (Attr::Dict(a), Attr::Dict(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Attr {}

impl Hash for Attr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Attr::Empty => {}
            Attr::Bool(b) => b.hash(state),
            Attr::Int(i) => i.hash(state),
            Attr::Long(l) => l.hash(state),
            Attr::Float(f) => f.to_bits().hash(state),
            Attr::Double(d) => d.to_bits().hash(state),
            Attr::String(s) => s.hash(state),
            Attr::List(list) => list.hash(state),
            Attr::Dict(dic) => dic.hash(state),
        }
    }
}

// ── Constructors ──────────────────────────────────────────────────────────

impl From<bool> for Attr {
    fn from(b: bool) -> Self {
        Attr::Bool(b)
    }
}

impl From<i32> for Attr {
    fn from(i: i32) -> Self {
        Attr::Int(i)
    }
}

impl From<i64> for Attr {
    fn from(l: i64) -> Self {
        Attr::Long(l)
    }
}

impl From<f32> for Attr {
    fn from(f: f32) -> Self {
        Attr::Float(f)
    }
}

impl From<f64> for Attr {
    fn from(d: f64) -> Self {
        Attr::Double(d)
    }
}

impl From<&str> for Attr {
    fn from(s: &str) -> Self {
        Attr::String(s.to_string())
    }
}

impl From<String> for Attr {
    fn from(s: String) -> Self {
        Attr::String(s)
    }
}

impl From<AttrList> for Attr {
    fn from(list: AttrList) -> Self {
        Attr::List(list)
    }
}

impl From<AttrDic> for Attr {
    fn from(dic: AttrDic) -> Self {
        Attr::Dict(dic)
    }
}

impl From<Vec<Attr>> for Attr {
    fn from(items: Vec<Attr>) -> Self {
        Attr::List(AttrList::from(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(attr: &Attr) -> u64 {
        let mut h = DefaultHasher::new();
        attr.hash(&mut h);
        h.finish()
    }

    #[test]
    fn numeric_variants_are_distinct() {
        assert_ne!(Attr::Int(1), Attr::Long(1));
        assert_ne!(Attr::Float(1.0), Attr::Double(1.0));
        assert_ne!(Attr::Int(0), Attr::Bool(false));
        assert_eq!(Attr::Long(7), Attr::Long(7));
    }

    #[test]
    fn float_equality_is_bitwise() {
        assert_eq!(Attr::Double(f64::NAN), Attr::Double(f64::NAN));
        assert_ne!(Attr::Double(0.0), Attr::Double(-0.0));
        assert_eq!(hash_of(&Attr::Double(f64::NAN)), hash_of(&Attr::Double(f64::NAN)));
    }

    #[test]
    fn coercing_readers() {
        assert_eq!(Attr::Double(3.9).as_int(), 3);
        assert_eq!(Attr::Double(-3.9).as_long(), -3);
        assert_eq!(Attr::Long(1 << 40).as_long(), 1 << 40);
        assert_eq!(Attr::String("42".into()).as_int(), 42);
        assert_eq!(Attr::String("2.5".into()).as_double(), 2.5);
        assert_eq!(Attr::String("abc".into()).as_int(), 0);
        assert_eq!(Attr::Bool(true).as_int(), 1);
        assert_eq!(Attr::Int(5).as_float(), 5.0);
        assert!(Attr::Int(2).as_bool());
        assert!(Attr::String("TRUE".into()).as_bool());
        assert!(!Attr::String("yes".into()).as_bool());
        assert!(!Attr::new_dic().as_bool());
        assert_eq!(Attr::new_list().as_int(), 0);
    }

    #[test]
    fn to_text_renders_scalars() {
        assert_eq!(Attr::Empty.to_text(), "");
        assert_eq!(Attr::Bool(false).to_text(), "false");
        assert_eq!(Attr::Int(-4).to_text(), "-4");
        assert_eq!(Attr::Double(1.4).to_text(), "1.4");
        assert_eq!(Attr::from("x").to_text(), "x");
        assert_eq!(Attr::new_list().to_text(), "");
    }

    #[test]
    fn views_do_not_coerce() {
        let attr = Attr::Int(3);
        assert_eq!(attr.as_str(), None);
        assert!(attr.as_list().is_none());
        assert!(attr.as_dic().is_none());
        assert_eq!(attr.kind(), AttrKind::Int);
        assert_eq!(attr.kind().as_str(), "int");
    }

    #[test]
    fn clone_is_deep() {
        let mut inner = AttrDic::new();
        inner.set("k", 1);
        let original = Attr::from(vec![Attr::from(inner)]);
        let mut copy = original.clone();
        if let Some(dic) = copy
            .as_list_mut()
            .and_then(|l| l.get_mut(0))
            .and_then(Attr::as_dic_mut)
        {
            dic.set("k", 2);
        }
        assert_eq!(original.at(0).and_then(|d| d.get("k")), Some(&Attr::Int(1)));
        assert_eq!(copy.at(0).and_then(|d| d.get("k")), Some(&Attr::Int(2)));
    }
}
