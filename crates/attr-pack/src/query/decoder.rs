//! `QueryDecoder` — bracket-notation query string parser.
//!
//! Pairs are applied left to right against one root dict. Whether a numeric
//! segment indexes a list or names a dict key depends on the container it
//! lands in at that moment:
//!
//! - an empty slot, a scalar, an empty dict or a list takes a canonical
//!   decimal segment (`0`, `7`, never `07`) as a list index;
//! - a non-empty dict takes it as a key;
//! - a non-numeric segment addressed to a list turns that list into a dict
//!   keyed `"0".."n-1"`.

use std::mem;

use attr_value::{Attr, AttrDic, AttrList};

use super::escape::percent_decode;
use crate::ParseError;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Largest number of placeholder slots one index may open past the end
    /// of a list. Indices beyond that become dict keys.
    pub array_limit: usize,
    /// Maximum number of bracket segments in one key.
    pub max_depth: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            array_limit: 1000,
            max_depth: 512,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryDecoder {
    options: QueryOptions,
}

/// A key segment with the byte offset of its first character.
type Segment<'a> = (&'a str, usize);

/// Splits `name[a][b]` into `name` and its bracket segments.
fn split_key(raw: &str, offset: usize) -> Result<(&str, Vec<Segment<'_>>), ParseError> {
    let Some(open) = raw.find('[') else {
        return Ok((raw, Vec::new()));
    };
    let bytes = raw.as_bytes();
    let mut segments = Vec::new();
    let mut x = open;
    while x < bytes.len() {
        if bytes[x] != b'[' {
            return Err(ParseError::MisplacedBracket(offset + x));
        }
        let close = raw[x + 1..]
            .find(']')
            .map(|i| x + 1 + i)
            .ok_or(ParseError::UnclosedBracket(offset + x))?;
        segments.push((&raw[x + 1..close], offset + x + 1));
        x = close + 1;
    }
    Ok((&raw[..open], segments))
}

/// Parses a canonical non-negative decimal: digits only, no leading zero.
fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}

fn next_dict_index(dic: &AttrDic) -> usize {
    dic.keys()
        .filter_map(parse_index)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

fn into_dic(slot: Attr) -> AttrDic {
    match slot {
        Attr::Dict(dic) => dic,
        Attr::List(list) => {
            tracing::debug!(len = list.len(), "query list converted to dict");
            list.into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect()
        }
        _ => AttrDic::new(),
    }
}

impl QueryDecoder {
    pub fn new() -> Self {
        Self::with_options(QueryOptions::default())
    }

    pub fn with_options(options: QueryOptions) -> Self {
        Self { options }
    }

    /// Decodes `input` into a dict. A leading `?` is ignored.
    pub fn decode(&self, input: &str) -> Result<AttrDic, ParseError> {
        let (body, mut offset) = match input.strip_prefix('?') {
            Some(rest) => (rest, 1),
            None => (input, 0),
        };
        let mut root = AttrDic::new();
        for pair in body.split('&') {
            let start = offset;
            offset += pair.len() + 1;
            if pair.is_empty() {
                continue;
            }
            let (raw_key, raw_value, value_at) = match pair.find('=') {
                Some(eq) => (&pair[..eq], &pair[eq + 1..], start + eq + 1),
                None => (pair, "", start + pair.len()),
            };
            let (raw_name, raw_segments) = split_key(raw_key, start)?;
            if raw_segments.len() > self.options.max_depth {
                return Err(ParseError::TooDeep(self.options.max_depth));
            }
            let name = percent_decode(raw_name, start)?;
            if name.is_empty() {
                continue;
            }
            let segments = raw_segments
                .into_iter()
                .map(|(segment, at)| percent_decode(segment, at))
                .collect::<Result<Vec<_>, _>>()?;
            let value = percent_decode(raw_value, value_at)?;

            let slot = root.entry_or_insert(name, Attr::default);
            let current = mem::take(slot);
            *slot = self.assign(current, &segments, value);
        }
        Ok(root)
    }

    /// Writes `value` under `segments` inside `slot`, returning the updated
    /// node. A scalar in the way is replaced by a fresh container.
    fn assign(&self, slot: Attr, segments: &[String], value: String) -> Attr {
        let Some((segment, rest)) = segments.split_first() else {
            return Attr::String(value);
        };
        if segment.is_empty() {
            return self.append(slot, rest, value);
        }
        match self.list_index(&slot, segment) {
            Some(index) => {
                let mut list = match slot {
                    Attr::List(list) => list,
                    _ => AttrList::new(),
                };
                while list.len() < index {
                    list.push("");
                }
                match list.get_mut(index) {
                    Some(child) => {
                        let current = mem::take(child);
                        *child = self.assign(current, rest, value);
                    }
                    None => list.push(self.assign(Attr::Empty, rest, value)),
                }
                Attr::List(list)
            }
            None => {
                let mut dic = into_dic(slot);
                let child = dic.entry_or_insert(segment.as_str(), Attr::default);
                let current = mem::take(child);
                *child = self.assign(current, rest, value);
                Attr::Dict(dic)
            }
        }
    }

    /// Handles a `[]` segment.
    fn append(&self, slot: Attr, rest: &[String], value: String) -> Attr {
        let element = self.assign(Attr::Empty, rest, value);
        match slot {
            Attr::List(mut list) => {
                list.push(element);
                Attr::List(list)
            }
            Attr::Dict(mut dic) if !dic.is_empty() => {
                let key = next_dict_index(&dic);
                dic.set(key.to_string(), element);
                Attr::Dict(dic)
            }
            _ => Attr::List(AttrList::from(vec![element])),
        }
    }

    fn list_index(&self, slot: &Attr, segment: &str) -> Option<usize> {
        let index = parse_index(segment)?;
        let len = match slot {
            Attr::List(list) => list.len(),
            Attr::Dict(dic) if !dic.is_empty() => return None,
            _ => 0,
        };
        if index > len && index - len > self.options.array_limit {
            return None;
        }
        Some(index)
    }
}
