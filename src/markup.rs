//! Markup stripping for field values that carry embedded HTML.
//!
//! Table cells and record fields sometimes hold rendered fragments like
//! `<a href="...">Name</a>`. Exported CSV must contain only the visible
//! text, so tag runs are removed and entities decoded before escaping.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a complete tag run, including attributes: `<b>`, `</td>`, `<br/>`.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Strip markup from a field value, keeping only its rendered text.
///
/// Removes tag runs, decodes HTML entities, and trims leading/trailing
/// whitespace. An unterminated `<` and unknown entities pass through
/// literally.
///
/// # Example
/// ```
/// use csvport::markup::strip_markup;
///
/// assert_eq!(strip_markup("<b>Bold</b> text"), "Bold text");
/// assert_eq!(strip_markup("Fish &amp; Chips"), "Fish & Chips");
/// ```
pub fn strip_markup(text: &str) -> String {
    let without_tags = TAG_RE.replace_all(text, "");
    decode_entities(&without_tags).trim().to_string()
}

/// Decode HTML entities into their literal characters.
///
/// Handles the named set that shows up in rendered table cells plus
/// numeric references. Anything unrecognized is kept verbatim.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        match decode_one_entity(candidate) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Try to decode a single entity at the start of `text` (which begins
/// with `&`). Returns the decoded text and the number of bytes consumed.
fn decode_one_entity(text: &str) -> Option<(String, usize)> {
    // Entities are short; an unbounded scan would swallow stray ampersands.
    // Byte scan keeps the window safe on multi-byte input.
    let semi = text.as_bytes().iter().take(12).position(|&b| b == b';')?;
    let name = &text[1..semi];
    let consumed = semi + 1;

    let decoded = match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        "nbsp" => " ".to_string(),
        _ => {
            let code = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()))?;
            char::from_u32(code)?.to_string()
        }
    };

    Some((decoded, consumed))
}
