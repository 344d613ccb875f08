//! Pointer text handling and path predicates.

/// Decodes `~1` to `/` and `~0` to `~`.
///
/// ```
/// use attr_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // `~1` first, so that `~01` yields `~1` rather than `/`.
    component.replace("~1", "/").replace("~0", "~")
}

/// Encodes `~` as `~0` and `/` as `~1`.
///
/// ```
/// use attr_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains(['/', '~']) {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Splits a pointer into unescaped steps.
///
/// The empty pointer is the root path. The first character is assumed to
/// be `/`; see [`parse_checked_pointer`](crate::parse_checked_pointer) for
/// a checked entry point.
///
/// ```
/// use attr_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~1b/0"), vec!["a/b", "0"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    match pointer.char_indices().nth(1) {
        None if pointer.is_empty() => Vec::new(),
        None => vec![String::new()],
        Some((start, _)) => pointer[start..].split('/').map(unescape_component).collect(),
    }
}

/// Joins steps into a pointer. The root path formats as `""`.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&escape_component(step));
    }
    out
}

/// True when `child` lies strictly below `parent`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Canonical non-negative decimal: digits only, no leading zero.
pub fn is_valid_index(step: &str) -> bool {
    let bytes = step.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}
