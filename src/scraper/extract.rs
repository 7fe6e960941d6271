//! Regex-based content extraction.
//!
//! Pure, synchronous functions over raw HTML. These are heuristics, not a
//! conforming HTML parser: good enough to pull a title, a meta
//! description, and readable text out of ordinary pages.

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title regex"));

static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<meta[^>]+name=["']description["'][^>]+content=["']([^"']+)["'][^>]*>"#)
        .expect("meta description regex")
});

static SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script regex"));

static STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("style regex"));

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Contents of the first `<title>` element, trimmed; empty if absent.
pub fn title(html: &str) -> String {
    TITLE
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Content of the `<meta name="description">` tag; empty if absent.
pub fn meta_description(html: &str) -> String {
    META_DESCRIPTION
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Plain text: scripts, styles, comments, and tags stripped, whitespace
/// collapsed.
pub fn text(html: &str) -> String {
    let text = SCRIPT.replace_all(html, "");
    let text = STYLE.replace_all(&text, "");
    let text = COMMENT.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title> Example Domain </title>
<meta name="description" content="A page for examples">
<style>body { margin: 0; }</style>
<script type="text/javascript">var x = "<b>ignored</b>";</script>
</head>
<body>
<!-- navigation -->
<h1>Example Domain</h1>
<p>This domain is for use in examples.</p>
</body>
</html>"#;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(title(PAGE), "Example Domain");
    }

    #[test]
    fn test_title_with_attributes() {
        assert_eq!(title(r#"<title data-x="1">Hi</title>"#), "Hi");
    }

    #[test]
    fn test_missing_title_is_empty() {
        assert_eq!(title("<html><body>no title</body></html>"), "");
    }

    #[test]
    fn test_meta_description_double_quotes() {
        assert_eq!(meta_description(PAGE), "A page for examples");
    }

    #[test]
    fn test_meta_description_single_quotes() {
        let html = "<meta name='description' content='single quoted'>";
        assert_eq!(meta_description(html), "single quoted");
    }

    #[test]
    fn test_missing_meta_description_is_empty() {
        assert_eq!(meta_description("<html></html>"), "");
    }

    #[test]
    fn test_text_strips_markup() {
        let text = text(PAGE);
        assert!(text.contains("Example Domain"));
        assert!(text.contains("This domain is for use in examples."));
        assert!(!text.contains("margin"));
        assert!(!text.contains("ignored"));
        assert!(!text.contains("navigation"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_text_collapses_whitespace() {
        assert_eq!(text("<p>a</p>\n\n  <p>b</p>"), "a b");
    }
}
