//! Node parser — decodes extended-escaped JSON text back into a [`Value`].
//!
//! Decoding is two-pass and never tokenizes character by character:
//!
//! 1. The [`crate::scanner`] records the position of every structural
//!    bracket.
//! 2. A recursive bracket matcher walks that list with a single shared
//!    cursor, building one node per bracketed region. When a node closes,
//!    each child's span is spliced out of the raw text and replaced with a
//!    `&i` placeholder, the remaining content is split on commas, and every
//!    segment resolves to a finished value (placeholders substitute the
//!    child's already-resolved value).
//!
//! The shared cursor is what keeps siblings from reprocessing a subtree a
//! child already consumed: a recursive call advances it past everything the
//! child matched, including closers of the wrong kind it scanned over.
//!
//! # Error policy
//!
//! Decoding is best-effort, matching the reference behavior: unmatched
//! brackets leave an empty container, a closing bracket of the wrong kind is
//! scanned past, and a segment no resolution rule recognizes becomes empty
//! text. None of these are errors. The single hard failure is
//! [`JsonLiteError::DepthExceeded`] when input nesting passes [`MAX_DEPTH`].
//! Callers that need strict validation must layer a grammar check of their
//! own in front of [`decode`].

use crate::error::{JsonLiteError, Result};
use crate::escape::unescape;
use crate::scanner::{scan, Boundary};
use crate::types::{looks_numeric, Value};
use std::borrow::Cow;

/// Maximum bracket nesting the node parser will follow before aborting with
/// [`JsonLiteError::DepthExceeded`].
pub const MAX_DEPTH: usize = 128;

/// Decode extended-escaped JSON text into a [`Value`].
///
/// Input with no brackets at all is a bare scalar document: the whole
/// trimmed text resolves through the same segment rules as any container
/// element.
///
/// # Example
/// ```
/// use jsonlite_core::{decode, Value};
///
/// let value = decode(r#"[1,"two",null]"#).unwrap();
/// assert_eq!(
///     value,
///     Value::Sequence(vec![
///         Value::Int(1),
///         Value::Text("two".to_string()),
///         Value::Null,
///     ])
/// );
/// ```
pub fn decode(text: &str) -> Result<Value> {
    let boundaries = scan(text);
    if boundaries.is_empty() {
        return Ok(resolve_segment(text.trim(), &[]));
    }
    let mut cursor = 0;
    let root = build_node(text, &boundaries, &mut cursor, 0)?;
    Ok(root.value)
}

/// An in-progress parse unit for one bracketed region.
struct Node {
    /// Byte offset of the opening bracket.
    start: usize,
    /// Byte offset of the matching closing bracket.
    end: usize,
    /// `{` opened this node. Kind comes from the bracket alone, never from
    /// content.
    is_mapping: bool,
    /// Nested nodes, in source order.
    children: Vec<Node>,
    /// Resolved value, populated when the node closes. An unmatched opener
    /// never closes and keeps the empty container.
    value: Value,
}

/// Build the node starting at `boundaries[*cursor]`, which must be in range.
///
/// The cursor is shared down the recursion: on return it sits just past the
/// last boundary this node consumed, so the caller's scan resumes after the
/// entire subtree.
fn build_node(
    text: &str,
    boundaries: &[Boundary],
    cursor: &mut usize,
    depth: usize,
) -> Result<Node> {
    if depth >= MAX_DEPTH {
        return Err(JsonLiteError::DepthExceeded { limit: MAX_DEPTH });
    }

    let open = boundaries[*cursor];
    let is_mapping = open.ch == b'{';
    let mut node = Node {
        start: open.offset,
        end: open.offset,
        is_mapping,
        children: Vec::new(),
        value: empty_container(is_mapping),
    };
    *cursor += 1;

    while *cursor < boundaries.len() {
        let boundary = boundaries[*cursor];
        if boundary.is_opener() {
            let child = build_node(text, boundaries, cursor, depth + 1)?;
            node.children.push(child);
            continue;
        }
        if (boundary.ch == b'}') == node.is_mapping {
            close_node(&mut node, text, boundary.offset);
            *cursor += 1;
            return Ok(node);
        }
        // Closer of the other kind: scanned past, as the reference does.
        *cursor += 1;
    }

    // Ran out of boundaries without a matching closer.
    Ok(node)
}

fn empty_container(is_mapping: bool) -> Value {
    if is_mapping {
        Value::Mapping(Vec::new())
    } else {
        Value::Sequence(Vec::new())
    }
}

/// Resolve a closed node's content into its final value.
fn close_node(node: &mut Node, text: &str, end: usize) {
    node.end = end;
    let content = assemble_content(node, text);

    let segments: Vec<&str> = content.split(',').collect();
    if segments.len() == 1 && segments[0].trim().is_empty() {
        // Empty container; the constructed value already is one.
        return;
    }

    if node.is_mapping {
        let mut entries: Vec<(String, Value)> = Vec::new();
        for segment in &segments {
            // key:value splits on the first colon only
            let (raw_key, raw_value) = match segment.split_once(':') {
                Some((key, value)) => (key, value),
                None => (*segment, ""),
            };
            let key = unescape(raw_key.trim());
            let value = resolve_segment(raw_value.trim(), &node.children);
            // last write wins, original position kept
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        node.value = Value::Mapping(entries);
    } else {
        let items = segments
            .iter()
            .map(|segment| resolve_segment(segment.trim(), &node.children))
            .collect();
        node.value = Value::Sequence(items);
    }
}

/// Rebuild a node's interior with each child's span elided to a `&i`
/// placeholder.
///
/// The text between consecutive children (and around the first and last) is
/// kept verbatim, so commas and key separators survive while nested regions
/// shrink to opaque atoms the comma split cannot see into.
fn assemble_content<'a>(node: &Node, text: &'a str) -> Cow<'a, str> {
    if node.children.is_empty() {
        return Cow::Borrowed(&text[node.start + 1..node.end]);
    }

    let mut content = String::new();
    content.push_str(&text[node.start + 1..node.children[0].start]);
    for (i, child) in node.children.iter().enumerate() {
        content.push('&');
        content.push_str(&i.to_string());
        let gap_end = match node.children.get(i + 1) {
            Some(next) => next.start,
            None => node.end,
        };
        content.push_str(&text[child.end + 1..gap_end]);
    }
    Cow::Owned(content)
}

/// Resolve one trimmed segment to a value.
///
/// Resolution order: literals, numeric grammar (`i64` first, then `f64`),
/// quoted text, `&i` child reference. Anything else — including a reference
/// to a child index that does not exist — falls back to empty text rather
/// than failing.
fn resolve_segment(segment: &str, children: &[Node]) -> Value {
    match segment {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    if looks_numeric(segment) {
        return match segment.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => match segment.parse::<f64>() {
                Ok(f) => Value::Float(f),
                Err(_) => Value::Text(String::new()),
            },
        };
    }

    match segment.as_bytes().first() {
        Some(b'"') => Value::Text(unescape(segment)),
        Some(b'&') => segment[1..]
            .parse::<usize>()
            .ok()
            .and_then(|index| children.get(index))
            .map(|child| child.value.clone())
            .unwrap_or_else(|| Value::Text(String::new())),
        _ => Value::Text(String::new()),
    }
}
