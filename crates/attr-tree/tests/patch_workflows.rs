use attr_tree::attr_patch::{apply_patch, from_attr_patch, ApplyPatchOptions};
use attr_tree::{apply, diff, parse_json, parse_query, serialize_json, serialize_query, try_apply};
use attr_tree::{Attr, AttrList, PatchError};

fn doc(text: &str) -> Attr {
    parse_json(text).unwrap()
}

fn patch(text: &str) -> AttrList {
    match parse_json(text).unwrap() {
        Attr::List(list) => list,
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn list_shrink_diff() {
    let ops = diff(&doc("[1,2,3]"), &doc("[1,3]"));
    assert_eq!(ops, patch(r#"[{"op":"replace","path":"/1","value":3},{"op":"remove","path":"/2"}]"#));
}

#[test]
fn idempotent_diff() {
    let tree = doc(r#"{"a":[1,{"b":[]}],"c":"x"}"#);
    assert!(diff(&tree, &tree).is_empty());
}

#[test]
fn test_op_passes_then_fails() {
    let check = patch(r#"[{"op":"test","path":"/foo","value":"bar"}]"#);
    let mut tree = doc(r#"{"foo":"bar"}"#);
    assert!(apply(&mut tree, &check));
    assert_eq!(tree, doc(r#"{"foo":"bar"}"#));

    assert!(apply(&mut tree, &patch(r#"[{"op":"replace","path":"/foo","value":"baz"}]"#)));
    assert!(!apply(&mut tree, &check));
    assert_eq!(try_apply(&mut tree, &check), Err(PatchError::Test));
}

#[test]
fn move_example() {
    let mut tree = doc(r#"{"foo":[1,2,3]}"#);
    assert!(apply(&mut tree, &patch(r#"[{"op":"move","path":"/bar","from":"/foo"}]"#)));
    assert_eq!(tree, doc(r#"{"bar":[1,2,3]}"#));
    assert!(tree.get("foo").is_none());
}

#[test]
fn failed_move_to_missing_parent_keeps_value() {
    let mut tree = doc(r#"{"a":1}"#);
    assert!(!apply(&mut tree, &patch(r#"[{"op":"move","from":"/a","path":"/missing/x"}]"#)));
    assert_eq!(serialize_json(&tree), r#"{"a":1}"#);
}

#[test]
fn failed_test_keeps_earlier_operations() {
    let mut tree = doc(r#"{"n":1}"#);
    let ops = patch(
        r#"[{"op":"add","path":"/m","value":2},
            {"op":"test","path":"/n","value":5},
            {"op":"add","path":"/k","value":3}]"#,
    );
    assert!(!apply(&mut tree, &ops));
    assert_eq!(tree, doc(r#"{"n":1,"m":2}"#));
}

#[test]
fn atomic_mode_discards_partial_work() {
    let mut tree = doc(r#"{"n":1}"#);
    let ops = from_attr_patch(&patch(
        r#"[{"op":"add","path":"/m","value":2},{"op":"test","path":"/n","value":5}]"#,
    ))
    .unwrap();
    let result = apply_patch(&mut tree, &ops, &ApplyPatchOptions { mutate: false });
    assert_eq!(result, Err(PatchError::Test));
    assert_eq!(tree, doc(r#"{"n":1}"#));
}

#[test]
fn malformed_patch_touches_nothing() {
    let mut tree = doc(r#"{"n":1}"#);
    let ops = patch(r#"[{"op":"add","path":"/m","value":2},{"op":"frobnicate","path":"/n"}]"#);
    assert!(matches!(try_apply(&mut tree, &ops), Err(PatchError::InvalidOp(_))));
    assert_eq!(tree, doc(r#"{"n":1}"#));
}

#[test]
fn patch_document_survives_json() {
    let from = doc(r#"{"inv":{"gold":10,"a/b":["x","y","z"]},"lvl":3}"#);
    let to = doc(r#"{"inv":{"gold":12.5,"a/b":["x"]},"name":"ada"}"#);
    let text = serialize_json(&Attr::List(diff(&from, &to)));
    let mut tree = from.clone();
    assert!(apply(&mut tree, &patch(&text)));
    assert_eq!(tree, to);
}

#[test]
fn query_tree_diffs_like_any_other() {
    let before = parse_query("cart[items][]=apple&cart[items][]=pear&user=ann").unwrap();
    let after = parse_query("cart[items][]=apple&user=bob").unwrap();
    let mut tree = Attr::Dict(before);
    let ops = diff(&tree, &Attr::Dict(after.clone()));
    assert_eq!(ops.len(), 2);
    assert!(apply(&mut tree, &ops));
    assert_eq!(tree, Attr::Dict(after.clone()));
    assert_eq!(serialize_query(&after), "cart[items][]=apple&user=bob");
}
