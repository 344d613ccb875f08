use attr_pointer::{
    find, find_value, format_json_pointer, parse_checked_pointer, parse_json_pointer, PathError,
};
use attr_value::Attr;
use serde_json::json;

// Pointer examples from RFC 6901 section 5, evaluated against an attribute tree.
#[test]
fn rfc6901_examples() {
    let doc = Attr::from(json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    }));
    let cases: &[(&str, serde_json::Value)] = &[
        ("", json!({
            "foo": ["bar", "baz"], "": 0, "a/b": 1, "c%d": 2, "e^f": 3,
            "g|h": 4, "i\\j": 5, "k\"l": 6, " ": 7, "m~n": 8
        })),
        ("/foo", json!(["bar", "baz"])),
        ("/foo/0", json!("bar")),
        ("/", json!(0)),
        ("/a~1b", json!(1)),
        ("/c%d", json!(2)),
        ("/e^f", json!(3)),
        ("/g|h", json!(4)),
        ("/i\\j", json!(5)),
        ("/k\"l", json!(6)),
        ("/ ", json!(7)),
        ("/m~0n", json!(8)),
    ];
    for (pointer, expected) in cases {
        let path = parse_checked_pointer(pointer).unwrap();
        assert_eq!(format_json_pointer(&path), *pointer);
        assert_eq!(find_value(&doc, &path), Ok(&Attr::from(expected.clone())), "pointer {pointer:?}");
    }
}

#[test]
fn find_reports_container_and_errors() {
    let doc = Attr::from(json!({"list": [{"id": 1}, {"id": 2}]}));
    let r = find(&doc, &parse_json_pointer("/list/1/id")).unwrap();
    assert_eq!(r.val, Some(&Attr::Int(2)));
    assert_eq!(r.obj, Some(&Attr::from(json!({"id": 2}))));

    assert_eq!(
        find(&doc, &parse_json_pointer("/list/x")),
        Err(PathError::InvalidIndex)
    );
    assert_eq!(
        find(&doc, &parse_json_pointer("/list/5/id")),
        Err(PathError::NotFound)
    );
    assert_eq!(
        find(&doc, &parse_json_pointer("/list/0/id/deeper")),
        Err(PathError::NotAContainer)
    );
}
