//! Parsing for the `N-name` section naming convention.
//!
//! Section directories may carry a numeric prefix (`1-`, `2-`, `10-`) whose only
//! job is to force an ordering. The prefix never shows up in the menu title,
//! but the full directory name stays the section slug and URL segment.
//!
//! ## Display Titles
//!
//! After the prefix is stripped, dashes become spaces and every word is
//! capitalised:
//! - `3-photo-gallery` → "Photo Gallery"
//! - `about-me` → "About Me"
//! - `2-about` → "About"

/// Result of parsing a section directory name like `3-photo-gallery`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Digits of the ordering prefix if present (e.g. `"3"` from `3-photo-gallery`).
    /// Kept as text: ordering is lexicographic on the full name, never numeric.
    pub prefix: Option<String>,
    /// Raw name part after `N-`, dashes preserved. For unprefixed names this
    /// is the full input.
    pub name: String,
    /// Display title: name with dashes converted to spaces, each word capitalised.
    pub display_title: String,
}

/// Parse a section name following the `N-name` convention.
///
/// - `"3-photo-gallery"` → prefix=Some("3"), name="photo-gallery", display_title="Photo Gallery"
/// - `"10-news"` → prefix=Some("10"), name="news", display_title="News"
/// - `"about"` → prefix=None, name="about", display_title="About"
/// - `"2024"` → prefix=None, name="2024", display_title="2024" (no dash, nothing stripped)
/// - `"1-"` → prefix=Some("1"), name="", display_title=""
pub fn parse_entry_name(name: &str) -> ParsedName {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && name.as_bytes().get(digits) == Some(&b'-') {
        let raw = &name[digits + 1..];
        return ParsedName {
            prefix: Some(name[..digits].to_string()),
            name: raw.to_string(),
            display_title: title_case(&raw.replace('-', " ")),
        };
    }
    ParsedName {
        prefix: None,
        name: name.to_string(),
        display_title: title_case(&name.replace('-', " ")),
    }
}

/// Capitalise the first character of every whitespace-delimited word.
///
/// Only the first character changes; the rest of each word is left as is, so
/// `"iOS tips"` becomes `"IOS Tips"`. Whitespace runs are preserved.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether `segment` can name a section in a URL (`[A-Za-z0-9-]+`).
pub fn is_section_slug(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Whether `segment` can name a document in a URL (`[A-Za-z][A-Za-z0-9-]*`).
///
/// Document slugs must start with a letter so they never collide with page
/// numbers under the same `/<section>/<segment>` route.
pub fn is_document_slug(segment: &str) -> bool {
    segment
        .as_bytes()
        .first()
        .is_some_and(|b| b.is_ascii_alphabetic())
        && is_section_slug(segment)
}

/// Whether `segment` is a page number (`[0-9]+`).
pub fn is_page_number(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
