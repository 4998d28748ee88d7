//! `<img>` tag extraction.
//!
//! This is a pattern scanner, not an HTML parser: it finds `<img ...>`
//! elements by their byte shape, pulls out double-quoted `alt` and `src`
//! values verbatim (no entity decoding), and drops any tag that lacks
//! either one.

use crate::patterns::{ALT_ATTR_RE, SRC_ATTR_RE};

/// An `<img>` tag that carried both a non-empty `alt` and `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct RawTag {
    pub alt: String,
    pub src: String,
}

impl RawTag {
    pub fn new(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            src: src.into(),
        }
    }
}

/// Lazy iterator over the usable `<img>` tags of an HTML string, in
/// document order.
#[derive(Debug, Clone)]
pub struct ImgTags<'a> {
    html: &'a str,
    pos: usize,
}

/// Scan `html` for `<img>` tags with both `alt` and `src`.
///
/// # Examples
///
/// ```
/// use shotgrid::extract_tags;
///
/// let html = r#"<p><img alt="home" src="a.png"><img src="b.png"/></p>"#;
/// let tags: Vec<_> = extract_tags(html).collect();
/// assert_eq!(tags.len(), 1);
/// assert_eq!(tags[0].alt, "home");
/// ```
pub fn extract_tags(html: &str) -> ImgTags<'_> {
    ImgTags { html, pos: 0 }
}

impl<'a> Iterator for ImgTags<'a> {
    type Item = RawTag;

    fn next(&mut self) -> Option<RawTag> {
        let bytes = self.html.as_bytes();

        while self.pos < bytes.len() {
            let tag_start = self.pos + memchr::memchr(b'<', &bytes[self.pos..])?;

            if !is_img_open(&bytes[tag_start + 1..]) {
                self.pos = tag_start + 1;
                continue;
            }

            let Some(tag_end_rel) = memchr::memchr(b'>', &bytes[tag_start..]) else {
                // Unterminated tag runs to the end of input
                self.pos = bytes.len();
                return None;
            };
            let tag_end = tag_start + tag_end_rel;
            self.pos = tag_end + 1;

            // "<img" is ASCII, so tag_start + 4 is a char boundary
            let attrs = &self.html[tag_start + 4..tag_end];
            match (attr_value(attrs, Attr::Alt), attr_value(attrs, Attr::Src)) {
                (Some(alt), Some(src)) => return Some(RawTag::new(alt, src)),
                (alt, src) => {
                    tracing::debug!(
                        offset = tag_start,
                        has_alt = alt.is_some(),
                        has_src = src.is_some(),
                        "skipping <img> without alt and src"
                    );
                }
            }
        }

        None
    }
}

impl std::iter::FusedIterator for ImgTags<'_> {}

#[derive(Clone, Copy)]
enum Attr {
    Alt,
    Src,
}

/// Value of a double-quoted attribute, or None when absent or empty.
fn attr_value(attrs: &str, attr: Attr) -> Option<&str> {
    let re = match attr {
        Attr::Alt => &*ALT_ATTR_RE,
        Attr::Src => &*SRC_ATTR_RE,
    };
    re.captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
}

/// Whether the bytes following a `<` open an `img` element.
fn is_img_open(after_lt: &[u8]) -> bool {
    after_lt.len() >= 3
        && after_lt[..3].eq_ignore_ascii_case(b"img")
        && after_lt
            .get(3)
            .is_none_or(|&b| b.is_ascii_whitespace() || b == b'/' || b == b'>')
}
