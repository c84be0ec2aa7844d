//! Extended string escaping and unescaping.
//!
//! Beyond the standard JSON escapes, [`escape`] hex-escapes `,` `[` `]` `{`
//! `}` as `\u00XX`. That over-escaping is what keeps the decoder sound: the
//! boundary scanner and comma split never look inside string literals, so the
//! encoder guarantees those bytes simply never occur inside one. Standard
//! JSON produced elsewhere does not carry this guarantee — see the crate docs
//! for the compatibility tradeoff.

/// Escape raw text into a quoted jsonlite string literal.
///
/// Per-byte mapping:
/// - backspace, tab, newline, form feed, carriage return → `\b \t \n \f \r`
/// - `"` `/` `\` → backslash-escaped
/// - `,` `[` `]` `{` `}` → `\u00XX` (the extended escapes)
/// - any other byte below 0x20 or above 0x7E → `\u00XX`
/// - everything else → the literal byte
///
/// The output never contains a raw `,` `[` `]` `{` or `}` byte.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for &b in text.as_bytes() {
        match b {
            0x08 => out.push_str("\\b"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            0x0c => out.push_str("\\f"),
            b'\r' => out.push_str("\\r"),
            b'"' => out.push_str("\\\""),
            b'/' => out.push_str("\\/"),
            b'\\' => out.push_str("\\\\"),
            b',' | b'[' | b']' | b'{' | b'}' => push_hex_escape(&mut out, b),
            b if b < 0x20 || b > 0x7e => push_hex_escape(&mut out, b),
            b => out.push(b as char),
        }
    }
    out.push('"');
    out
}

fn push_hex_escape(out: &mut String, b: u8) {
    out.push_str(&format!("\\u{:04x}", b));
}

/// Unescape a jsonlite string literal back into raw text.
///
/// Strips a leading and trailing `"` when present (malformed input without
/// them is processed as-is). Recognizes `\b \t \n \f \r \" \/ \\` and
/// `\uXXXX` with exactly four hex digits. Any other character after a
/// backslash passes through literally, so `\q` yields `q`; a lone trailing
/// backslash is dropped.
///
/// `\uXXXX` handling is byte-oriented for values up to 0xFF — each such
/// escape contributes one raw byte, which is what makes the per-byte
/// [`escape`] of multi-byte UTF-8 text invertible. Values above 0xFF append
/// the code point's UTF-8 encoding; unpaired surrogates become U+FFFD. The
/// assembled bytes are decoded as UTF-8 with lossy replacement.
pub fn unescape(literal: &str) -> String {
    let mut inner = literal;
    if let Some(rest) = inner.strip_prefix('"') {
        inner = rest;
    }
    if let Some(rest) = inner.strip_suffix('"') {
        inner = rest;
    }

    let bytes = inner.as_bytes();
    let mut buf = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' {
            buf.push(b);
            i += 1;
            continue;
        }
        let Some(&esc) = bytes.get(i + 1) else {
            break;
        };
        i += 2;
        match esc {
            b'b' => buf.push(0x08),
            b't' => buf.push(b'\t'),
            b'n' => buf.push(b'\n'),
            b'f' => buf.push(0x0c),
            b'r' => buf.push(b'\r'),
            b'"' | b'/' | b'\\' => buf.push(esc),
            b'u' => match hex4(&bytes[i..]) {
                Some(code) => {
                    i += 4;
                    push_code_point(&mut buf, code);
                }
                // not followed by four hex digits: unknown-escape rule
                None => buf.push(b'u'),
            },
            other => buf.push(other),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Parse exactly four hex digits from the front of `bytes`.
fn hex4(bytes: &[u8]) -> Option<u32> {
    if bytes.len() < 4 {
        return None;
    }
    let mut value = 0u32;
    for &b in &bytes[..4] {
        value = value * 16 + (b as char).to_digit(16)?;
    }
    Some(value)
}

fn push_code_point(buf: &mut Vec<u8>, code: u32) {
    match code {
        0x00..=0xff => buf.push(code as u8),
        0xd800..=0xdfff => buf.extend_from_slice("\u{fffd}".as_bytes()),
        _ => {
            let mut utf8 = [0u8; 4];
            let ch = char::from_u32(code).unwrap_or('\u{fffd}');
            buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
    }
}
