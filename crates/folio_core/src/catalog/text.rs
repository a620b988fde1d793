//! Plain-text projections of markdown bodies.
//!
//! Rules:
//! - `derive_preview`: images dropped, links reduced to their label,
//!   markdown symbols removed, whitespace collapsed, first
//!   `PREVIEW_MAX_CHARS` characters kept.
//! - `split_paragraphs`: body split on two or more consecutive newlines.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 160;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n){2,}").expect("valid paragraph regex"));

/// Derives a one-line teaser from a markdown body.
///
/// Returns `None` when nothing readable is left.
pub fn derive_preview(body: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(body, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut preview = trimmed.chars().take(PREVIEW_MAX_CHARS).collect::<String>();
    if trimmed.chars().count() > PREVIEW_MAX_CHARS {
        preview = preview.trim_end().to_string();
        preview.push_str("...");
    }
    Some(preview)
}

/// Splits a body into trimmed, non-empty paragraphs.
pub fn split_paragraphs(body: &str) -> Vec<String> {
    PARAGRAPH_BREAK_RE
        .split(body)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_preview, split_paragraphs, PREVIEW_MAX_CHARS};

    #[test]
    fn preview_strips_markdown_and_keeps_link_labels() {
        let preview =
            derive_preview("# Title\n\n![cover](a.png) read [the post](https://x.y) **now**")
                .expect("preview should exist");
        assert_eq!(preview, "Title read the post now");
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "word ".repeat(100);
        let preview = derive_preview(&body).expect("preview should exist");
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= PREVIEW_MAX_CHARS + 3);
    }

    #[test]
    fn preview_of_symbols_only_is_none() {
        assert_eq!(derive_preview("## **"), None);
    }

    #[test]
    fn paragraphs_split_on_blank_lines_only() {
        let body = "line one\nline two\n\n\nsecond\r\n\r\nthird\n\n";
        assert_eq!(
            split_paragraphs(body),
            vec![
                "line one\nline two".to_string(),
                "second".to_string(),
                "third".to_string()
            ]
        );
    }
}
