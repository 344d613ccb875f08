//! `QueryEncoder` — flattens a dict into bracket-notation pairs.

use attr_value::{Attr, AttrDic};

use super::escape::percent_encode;

/// Emits one `key[seg]...=value` pair per leaf, in pre-order.
///
/// Scalar list elements are written with `[]`. A container list element is
/// written with its explicit index so its leaves land in the same element
/// when re-parsed. Empty containers produce no pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEncoder;

impl QueryEncoder {
    pub fn encode(&self, root: &AttrDic) -> String {
        let mut pairs = Vec::new();
        for (key, value) in root {
            self.write_any(&mut pairs, &percent_encode(key), value);
        }
        pairs.join("&")
    }

    fn write_any(&self, pairs: &mut Vec<String>, key: &str, value: &Attr) {
        match value {
            Attr::Dict(dic) => {
                for (k, v) in dic {
                    self.write_any(pairs, &format!("{key}[{}]", percent_encode(k)), v);
                }
            }
            Attr::List(list) => {
                for (i, item) in list.iter().enumerate() {
                    if item.is_container() {
                        self.write_any(pairs, &format!("{key}[{i}]"), item);
                    } else {
                        self.write_any(pairs, &format!("{key}[]"), item);
                    }
                }
            }
            scalar => pairs.push(format!("{key}={}", percent_encode(&scalar.to_text()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: serde_json::Value) -> String {
        match Attr::from(value) {
            Attr::Dict(dic) => QueryEncoder.encode(&dic),
            other => panic!("expected dict, got {other:?}"),
        }
    }

    #[test]
    fn nested_pairs_in_preorder() {
        assert_eq!(
            encode(json!({"test": {"aaa": "bbb", "ccc": "ddd", "ddd": ["eee"]}})),
            "test[aaa]=bbb&test[ccc]=ddd&test[ddd][]=eee"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        assert_eq!(encode(json!({"a": "x=y z"})), "a=x%3Dy%20z");
        assert_eq!(encode(json!({"a b": {"c[d]": "1"}})), "a%20b[c%5Bd%5D]=1");
    }

    #[test]
    fn container_list_elements_keep_index() {
        assert_eq!(
            encode(json!({"a": ["s", {"b": "1", "c": "2"}, ["t"]]})),
            "a[]=s&a[1][b]=1&a[1][c]=2&a[2][]=t"
        );
    }

    #[test]
    fn scalars_use_text_form() {
        assert_eq!(
            encode(json!({"n": 3, "f": 1.5, "t": true, "e": null})),
            "n=3&f=1.5&t=true&e="
        );
    }

    #[test]
    fn empty_containers_emit_nothing() {
        assert_eq!(encode(json!({"a": [], "b": {}, "c": "1"})), "c=1");
        assert_eq!(encode(json!({})), "");
    }
}
