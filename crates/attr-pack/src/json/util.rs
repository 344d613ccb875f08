use crate::ParseError;

/// Finds the closing quote of a JSON string body starting at `x`, skipping
/// backslash-escaped characters.
pub(super) fn find_ending_quote(data: &[u8], mut x: usize) -> Result<usize, ParseError> {
    while x < data.len() {
        match data[x] {
            b'"' => return Ok(x),
            b'\\' => x += 2,
            _ => x += 1,
        }
    }
    Err(ParseError::UnexpectedEnd(data.len()))
}

/// Decodes a JSON string body (the bytes between the quotes).
///
/// `offset` is the position of the body in the whole input and is only used
/// for error reporting.
pub(super) fn decode_json_string(bytes: &[u8], offset: usize) -> Result<String, ParseError> {
    if let Some(i) = bytes.iter().position(|&b| b < 0x20) {
        return Err(ParseError::ControlCharacter(offset + i));
    }
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::InvalidUtf8(offset + e.valid_up_to()))?;
    if !text.contains('\\') {
        return Ok(text.to_string());
    }
    // Escapes (including surrogate pairs) are resolved by serde_json.
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    quoted.push_str(text);
    quoted.push('"');
    serde_json::from_str::<String>(&quoted).map_err(|_| ParseError::InvalidEscape(offset))
}

/// Escapes a string for output inside JSON quotes.
///
/// With `ascii_only`, every non-ASCII character is written as `\uXXXX`
/// (UTF-16 surrogate pairs above the BMP).
pub(super) fn escape(s: &str, ascii_only: bool, out: &mut String) {
    let mut last = 0;
    for (i, ch) in s.char_indices() {
        let needs_escape = matches!(ch, '"' | '\\') || ch < '\u{20}' || (ascii_only && !ch.is_ascii());
        if !needs_escape {
            continue;
        }
        out.push_str(&s[last..i]);
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
        last = i + ch.len_utf8();
    }
    out.push_str(&s[last..]);
}
