//! Conversions between [`Attr`] and `serde_json::Value`.
//!
//! JSON numbers land in the narrowest attribute variant that holds them:
//! `Int` when the integer fits 32 bits, `Long` for other `i64` values, and
//! `Double` for floats and unsigned values beyond `i64::MAX`.

use serde_json::{Number, Value};

use crate::{Attr, AttrDic, AttrList};

fn number_to_attr(n: &Number) -> Attr {
    if let Some(i) = n.as_i64() {
        return match i32::try_from(i) {
            Ok(small) => Attr::Int(small),
            Err(_) => Attr::Long(i),
        };
    }
    Attr::Double(n.as_f64().unwrap_or(0.0))
}

fn float_to_value(f: f64) -> Value {
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}

impl From<Value> for Attr {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Attr::Empty,
            Value::Bool(b) => Attr::Bool(b),
            Value::Number(n) => number_to_attr(&n),
            Value::String(s) => Attr::String(s),
            Value::Array(arr) => Attr::List(arr.into_iter().map(Attr::from).collect::<AttrList>()),
            Value::Object(obj) => Attr::Dict(
                obj.into_iter()
                    .map(|(k, v)| (k, Attr::from(v)))
                    .collect::<AttrDic>(),
            ),
        }
    }
}

/// `Empty` becomes `null`, as do non-finite floats. `Float` payloads are
/// widened to `f64`, so their decimal rendering may gain digits.
impl From<&Attr> for Value {
    fn from(attr: &Attr) -> Self {
        match attr {
            Attr::Empty => Value::Null,
            Attr::Bool(b) => Value::Bool(*b),
            Attr::Int(i) => Value::from(*i),
            Attr::Long(l) => Value::from(*l),
            Attr::Float(f) => float_to_value(f64::from(*f)),
            Attr::Double(d) => float_to_value(*d),
            Attr::String(s) => Value::String(s.clone()),
            Attr::List(list) => Value::Array(list.iter().map(Value::from).collect()),
            Attr::Dict(dic) => Value::Object(
                dic.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Attr> for Value {
    fn from(attr: Attr) -> Self {
        Value::from(&attr)
    }
}
