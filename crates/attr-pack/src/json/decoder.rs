//! `JsonDecoder` — strict JSON decoder producing an [`Attr`] tree.

use attr_value::{Attr, AttrDic, AttrList};

use super::util::{decode_json_string, find_ending_quote};
use crate::ParseError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of arrays and objects.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

pub struct JsonDecoder {
    pub data: Vec<u8>,
    pub x: usize,
    depth: usize,
    options: DecodeOptions,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            data: Vec::new(),
            x: 0,
            depth: 0,
            options,
        }
    }

    /// Decodes one complete JSON document. Anything but whitespace after the
    /// top-level value is an error.
    pub fn decode(&mut self, input: &[u8]) -> Result<Attr, ParseError> {
        self.data = input.to_vec();
        self.x = if input.starts_with(UTF8_BOM) { UTF8_BOM.len() } else { 0 };
        self.depth = 0;
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(ParseError::TrailingCharacters(self.x));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    pub fn read_any(&mut self) -> Result<Attr, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd(self.x)),
            Some(b'"') => Ok(Attr::String(self.read_str()?)),
            Some(b'[') => self.read_arr(),
            Some(b'{') => self.read_obj(),
            Some(b't') => self.read_literal(b"true", Attr::Bool(true)),
            Some(b'f') => self.read_literal(b"false", Attr::Bool(false)),
            Some(b'n') => self.read_literal(b"null", Attr::Empty),
            Some(b'-' | b'0'..=b'9') => self.read_num(),
            Some(_) => Err(ParseError::Unexpected(self.x)),
        }
    }

    fn read_literal(&mut self, word: &[u8], value: Attr) -> Result<Attr, ParseError> {
        let end = self.x + word.len();
        if end > self.data.len() {
            return Err(ParseError::UnexpectedEnd(self.data.len()));
        }
        if &self.data[self.x..end] != word {
            return Err(ParseError::Unexpected(self.x));
        }
        self.x = end;
        Ok(value)
    }

    fn skip_digits(&self, mut x: usize) -> usize {
        while x < self.data.len() && self.data[x].is_ascii_digit() {
            x += 1;
        }
        x
    }

    pub fn read_num(&mut self) -> Result<Attr, ParseError> {
        let start = self.x;
        let mut x = start;
        if self.data.get(x) == Some(&b'-') {
            x += 1;
        }
        match self.data.get(x) {
            Some(b'0') => x += 1,
            Some(b'1'..=b'9') => x = self.skip_digits(x),
            _ => return Err(ParseError::InvalidNumber(start)),
        }
        let mut is_float = false;
        if self.data.get(x) == Some(&b'.') {
            is_float = true;
            let digits = x + 1;
            x = self.skip_digits(digits);
            if x == digits {
                return Err(ParseError::InvalidNumber(start));
            }
        }
        if let Some(b'e' | b'E') = self.data.get(x) {
            is_float = true;
            x += 1;
            if let Some(b'+' | b'-') = self.data.get(x) {
                x += 1;
            }
            let digits = x;
            x = self.skip_digits(digits);
            if x == digits {
                return Err(ParseError::InvalidNumber(start));
            }
        }
        self.x = x;

        let text = std::str::from_utf8(&self.data[start..x]).map_err(|_| ParseError::InvalidNumber(start))?;
        if !is_float {
            if let Ok(i) = text.parse::<i32>() {
                return Ok(Attr::Int(i));
            }
            if let Ok(l) = text.parse::<i64>() {
                return Ok(Attr::Long(l));
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Attr::Double(f)),
            _ => Err(ParseError::InvalidNumber(start)),
        }
    }

    pub fn read_str(&mut self) -> Result<String, ParseError> {
        if self.peek() != Some(b'"') {
            return Err(ParseError::Unexpected(self.x));
        }
        let x0 = self.x + 1;
        let x1 = find_ending_quote(&self.data, x0)?;
        let s = decode_json_string(&self.data[x0..x1], x0)?;
        self.x = x1 + 1;
        Ok(s)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::TooDeep(self.options.max_depth));
        }
        Ok(())
    }

    /// Consumes a `,` (returns `true`) or the closing byte (returns `false`).
    fn read_separator(&mut self, close: u8) -> Result<bool, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b',') => {
                self.x += 1;
                Ok(true)
            }
            Some(b) if b == close => {
                self.x += 1;
                Ok(false)
            }
            Some(_) => Err(ParseError::Unexpected(self.x)),
            None => Err(ParseError::UnexpectedEnd(self.x)),
        }
    }

    pub fn read_arr(&mut self) -> Result<Attr, ParseError> {
        self.enter()?;
        self.x += 1; // '['
        let mut list = AttrList::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.x += 1;
        } else {
            loop {
                list.push(self.read_any()?);
                if !self.read_separator(b']')? {
                    break;
                }
            }
        }
        self.depth -= 1;
        Ok(Attr::List(list))
    }

    pub fn read_obj(&mut self) -> Result<Attr, ParseError> {
        self.enter()?;
        self.x += 1; // '{'
        let mut dic = AttrDic::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
        } else {
            loop {
                self.skip_whitespace();
                let key = self.read_str()?;
                self.skip_whitespace();
                match self.peek() {
                    Some(b':') => self.x += 1,
                    Some(_) => return Err(ParseError::Unexpected(self.x)),
                    None => return Err(ParseError::UnexpectedEnd(self.x)),
                }
                let value = self.read_any()?;
                dic.set(key, value);
                if !self.read_separator(b'}')? {
                    break;
                }
            }
        }
        self.depth -= 1;
        Ok(Attr::Dict(dic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> Result<Attr, ParseError> {
        JsonDecoder::new().decode(s.as_bytes())
    }

    #[test]
    fn scalars() {
        assert_eq!(decode("true").unwrap(), Attr::Bool(true));
        assert_eq!(decode(" false ").unwrap(), Attr::Bool(false));
        assert_eq!(decode("null").unwrap(), Attr::Empty);
        assert_eq!(decode("\"hi\"").unwrap(), Attr::from("hi"));
    }

    #[test]
    fn number_widths() {
        assert_eq!(decode("0").unwrap(), Attr::Int(0));
        assert_eq!(decode("-2147483648").unwrap(), Attr::Int(i32::MIN));
        assert_eq!(decode("2147483648").unwrap(), Attr::Long(2_147_483_648));
        assert_eq!(decode("-9223372036854775808").unwrap(), Attr::Long(i64::MIN));
        assert_eq!(decode("9223372036854775808").unwrap(), Attr::Double(9_223_372_036_854_775_808.0));
        assert_eq!(decode("1.4").unwrap(), Attr::Double(1.4));
        assert_eq!(decode("1e3").unwrap(), Attr::Double(1000.0));
        assert_eq!(decode("-2.5E-1").unwrap(), Attr::Double(-0.25));
    }

    #[test]
    fn strict_number_grammar() {
        assert_eq!(decode("01"), Err(ParseError::TrailingCharacters(1)));
        assert_eq!(decode("1."), Err(ParseError::InvalidNumber(0)));
        assert_eq!(decode("-"), Err(ParseError::InvalidNumber(0)));
        assert_eq!(decode("1e"), Err(ParseError::InvalidNumber(0)));
        assert_eq!(decode("+1"), Err(ParseError::Unexpected(0)));
        assert_eq!(decode(".5"), Err(ParseError::Unexpected(0)));
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(decode("[1e400]"), Err(ParseError::InvalidNumber(1)));
        assert_eq!(decode("-1e400"), Err(ParseError::InvalidNumber(0)));
        assert_eq!(decode(&"9".repeat(400)), Err(ParseError::InvalidNumber(0)));
        assert_eq!(decode("1e308").unwrap(), Attr::Double(1e308));
        assert_eq!(decode("1e-400").unwrap(), Attr::Double(0.0));
    }

    #[test]
    fn containers() {
        let attr = decode(r#" { "a" : [ 1 , {"b": null} ] , "c": {} , "d": [] } "#).unwrap();
        let a = attr.get("a").and_then(Attr::as_list).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[1].get("b"), Some(&Attr::Empty));
        assert_eq!(attr.get("c"), Some(&Attr::new_dic()));
        assert_eq!(attr.get("d"), Some(&Attr::new_list()));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let attr = decode(r#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(attr.as_dic().map(AttrDic::len), Some(1));
        assert_eq!(attr.get("a"), Some(&Attr::Int(2)));
    }

    #[test]
    fn malformed_input() {
        assert_eq!(decode(""), Err(ParseError::UnexpectedEnd(0)));
        assert_eq!(decode("{\"a\":1"), Err(ParseError::UnexpectedEnd(6)));
        assert_eq!(decode("[1,]"), Err(ParseError::Unexpected(3)));
        assert_eq!(decode("[,1]"), Err(ParseError::Unexpected(1)));
        assert_eq!(decode("{\"a\" 1}"), Err(ParseError::Unexpected(5)));
        assert_eq!(decode("{a:1}"), Err(ParseError::Unexpected(1)));
        assert_eq!(decode("[1] x"), Err(ParseError::TrailingCharacters(4)));
        assert_eq!(decode("\"bad \\q\""), Err(ParseError::InvalidEscape(1)));
        assert_eq!(decode("tru"), Err(ParseError::UnexpectedEnd(3)));
        assert_eq!(decode("nul!"), Err(ParseError::Unexpected(0)));
        assert_eq!(decode("\"open"), Err(ParseError::UnexpectedEnd(5)));
    }

    #[test]
    fn depth_limit() {
        let mut decoder = JsonDecoder::with_options(DecodeOptions { max_depth: 2 });
        assert!(decoder.decode(b"[[1]]").is_ok());
        assert_eq!(decoder.decode(b"[[[1]]]"), Err(ParseError::TooDeep(2)));
    }

    #[test]
    fn decoder_is_reusable() {
        let mut decoder = JsonDecoder::new();
        assert_eq!(decoder.decode(b"[1]").unwrap(), Attr::from(vec![Attr::Int(1)]));
        assert_eq!(decoder.decode(b"2").unwrap(), Attr::Int(2));
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        assert_eq!(JsonDecoder::new().decode(b"\xEF\xBB\xBF1").unwrap(), Attr::Int(1));
    }

    #[test]
    fn invalid_utf8_in_string() {
        assert_eq!(JsonDecoder::new().decode(b"\"a\xFFb\""), Err(ParseError::InvalidUtf8(2)));
    }
}
