//! `JsonEncoder` — compact JSON writer for [`Attr`] trees.
//!
//! Output carries no insignificant whitespace. Dict keys are written in the
//! dict's insertion order.

use attr_value::{Attr, AttrDic, AttrList};

use super::util::escape;

/// Encoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Escape every non-ASCII character as `\uXXXX`.
    pub ascii_only: bool,
}

pub struct JsonEncoder {
    out: String,
    options: EncodeOptions,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::with_options(EncodeOptions::default())
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self {
            out: String::new(),
            options,
        }
    }

    pub fn encode(&mut self, value: &Attr) -> String {
        self.out.clear();
        self.write_any(value);
        std::mem::take(&mut self.out)
    }

    pub fn write_any(&mut self, value: &Attr) {
        match value {
            Attr::Empty => self.write_null(),
            Attr::Bool(b) => self.write_boolean(*b),
            Attr::Int(i) => self.write_integer(i64::from(*i)),
            Attr::Long(l) => self.write_integer(*l),
            Attr::Float(f) => self.write_f32(*f),
            Attr::Double(d) => self.write_f64(*d),
            Attr::String(s) => self.write_str(s),
            Attr::List(list) => self.write_arr(list),
            Attr::Dict(dic) => self.write_obj(dic),
        }
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        self.out.push_str(&int.to_string());
    }

    /// Shortest round-trip form. The `Debug` rendering always keeps a
    /// fraction or exponent, so the text re-parses as a `Double`.
    pub fn write_f64(&mut self, float: f64) {
        if float.is_finite() {
            self.out.push_str(&format!("{float:?}"));
        } else {
            self.write_null();
        }
    }

    pub fn write_f32(&mut self, float: f32) {
        if float.is_finite() {
            self.out.push_str(&format!("{float:?}"));
        } else {
            self.write_null();
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.push('"');
        escape(s, self.options.ascii_only, &mut self.out);
        self.out.push('"');
    }

    pub fn write_arr(&mut self, list: &AttrList) {
        self.out.push('[');
        for (i, item) in list.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_any(item);
        }
        self.out.push(']');
    }

    pub fn write_obj(&mut self, dic: &AttrDic) {
        self.out.push('{');
        for (i, (key, value)) in dic.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_str(key);
            self.out.push(':');
            self.write_any(value);
        }
        self.out.push('}');
    }
}
