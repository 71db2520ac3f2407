//! Caption escaping for memegen path segments.
//!
//! memegen uses its own substitution dialect for characters that carry
//! meaning in a URL path. Substitution runs first; whatever is left over is
//! percent-encoded, leaving the dialect's markers untouched.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Placeholder the API reads as "no text".
pub const EMPTY_CAPTION: &str = "_";

/// Bytes that survive percent-encoding: the unreserved set plus `'`,
/// which the dialect emits for a double quote.
const CAPTION_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'');

/// Dialect substitution for a single character, if it has one.
fn substitute(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("_"),
        '-' => Some("--"),
        '_' => Some("__"),
        '?' => Some("~q"),
        '%' => Some("~p"),
        '#' => Some("~h"),
        '/' => Some("~s"),
        '"' => Some("''"),
        _ => None,
    }
}

/// Escape caption text for use as a memegen path segment.
///
/// An empty caption becomes [`EMPTY_CAPTION`].
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_CAPTION.to_string();
    }

    let mut substituted = String::with_capacity(text.len());
    for c in text.chars() {
        match substitute(c) {
            Some(marker) => substituted.push_str(marker),
            None => substituted.push(c),
        }
    }

    utf8_percent_encode(&substituted, CAPTION_ENCODE_SET).to_string()
}
