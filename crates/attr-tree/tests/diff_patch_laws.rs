//! Properties relating the diff engine and the patch engine.

use attr_tree::attr_patch::{apply_ops, from_attr_patch, to_attr_patch};
use attr_tree::attr_patch_diff::diff;
use attr_tree::{parse_json, serialize_json, Attr, AttrDic, AttrList};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Attr> {
    prop_oneof![
        Just(Attr::Empty),
        any::<bool>().prop_map(Attr::Bool),
        (-3i32..3).prop_map(Attr::Int),
        any::<i64>().prop_map(Attr::Long),
        any::<f32>().prop_map(Attr::Float),
        any::<f64>().prop_map(Attr::Double),
        "[a-c]{0,2}".prop_map(Attr::String),
    ]
}

fn tree() -> impl Strategy<Value = Attr> {
    leaf().prop_recursive(4, 40, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|v| Attr::List(AttrList::from(v))),
            prop::collection::vec(("[ab/~]{0,2}", inner), 0..5)
                .prop_map(|entries| Attr::Dict(entries.into_iter().collect::<AttrDic>())),
        ]
    })
}

/// Leaves the JSON codec reproduces exactly.
fn json_leaf() -> impl Strategy<Value = Attr> {
    prop_oneof![
        Just(Attr::Empty),
        any::<bool>().prop_map(Attr::Bool),
        (-3i32..3).prop_map(Attr::Int),
        (-2.0f64..2.0).prop_map(Attr::Double),
        "[a-c]{0,2}".prop_map(Attr::String),
    ]
}

fn json_tree() -> impl Strategy<Value = Attr> {
    json_leaf().prop_recursive(4, 40, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|v| Attr::List(AttrList::from(v))),
            prop::collection::vec(("[ab/~]{0,2}", inner), 0..5)
                .prop_map(|entries| Attr::Dict(entries.into_iter().collect::<AttrDic>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_patch_inverts_diff(a in tree(), b in tree()) {
        let ops = diff(&a, &b);
        let mut doc = a.clone();
        prop_assert!(apply_ops(&mut doc, &ops).is_ok(), "ops: {:?}", ops);
        prop_assert_eq!(doc, b);
    }

    #[test]
    fn prop_diff_of_self_is_empty(a in tree()) {
        prop_assert!(diff(&a, &a.clone()).is_empty());
    }

    #[test]
    fn prop_facade_patch_inverts_diff(a in tree(), b in tree()) {
        let patch = attr_tree::diff(&a, &b);
        let mut doc = a.clone();
        prop_assert!(attr_tree::apply(&mut doc, &patch));
        prop_assert_eq!(doc, b);
    }

    #[test]
    fn prop_patch_document_roundtrips(a in tree(), b in tree()) {
        let ops = diff(&a, &b);
        prop_assert_eq!(from_attr_patch(&to_attr_patch(&ops)), Ok(ops));
    }

    #[test]
    fn prop_json_patch_text_inverts_diff(a in json_tree(), b in json_tree()) {
        let text = serialize_json(&Attr::List(attr_tree::diff(&a, &b)));
        let patch = match parse_json(&text) {
            Ok(Attr::List(list)) => list,
            other => return Err(TestCaseError::fail(format!("bad patch text {text}: {other:?}"))),
        };
        let mut doc = a.clone();
        prop_assert!(attr_tree::apply(&mut doc, &patch));
        prop_assert_eq!(doc, b);
    }
}
