//! HTML Fragment Extraction
//!
//! Strips document-shell markup from a complete HTML document, leaving only
//! the body's inner content, safe to inject into another page's DOM.
//!
//! This is purely textual pattern matching: no DOM parsing, no entity
//! decoding, and no sanitization of adversarial markup. Block removal is
//! non-greedy (stops at the nearest matching close tag), so sequential
//! `<style>`/`<script>` blocks are each removed correctly, but a close tag
//! inside a nested same-named block (malformed input) will be mismatched.
//! The transform never fails; unmatched patterns leave the input unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Shell patterns removed once (first match only), in application order.
///
/// The head block is removed first so its style/script content doesn't
/// consume matches intended for body-level blocks.
static SHELL_ONCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // <head ...>...</head> block, non-greedy across newlines
        Regex::new(r"(?s)<head[^>]*>.*?</head>").unwrap(),
        // Opening <html ...> tag
        Regex::new(r"<html[^>]*>").unwrap(),
        // Closing </html> tag
        Regex::new(r"</html>").unwrap(),
        // Opening <body ...> tag
        Regex::new(r"<body[^>]*>").unwrap(),
        // Closing </body> tag
        Regex::new(r"</body>").unwrap(),
        // Doctype literal
        Regex::new(r"<!DOCTYPE html>").unwrap(),
    ]
});

/// Block patterns removed wherever they occur.
static SHELL_ALL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap(),
        Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap(),
    ]
});

/// Strip document-shell elements from a complete HTML document.
///
/// Removes, in order: the first `<head>...</head>` block, every
/// `<style>...</style>` and `<script>...</script>` block, the opening and
/// closing `<html>`/`<body>` tags, and a literal `<!DOCTYPE html>`.
/// Matching is case-sensitive (lowercase tags) and non-greedy.
///
/// The result upholds balanced removal: an opening shell tag and its
/// matching close tag are removed together or not at all.
///
/// # Examples
///
/// ```
/// use listview_preview_core::utils::strip_document_shell;
///
/// let html = "<!DOCTYPE html><html><head><title>T</title></head>\
///             <body><div>X</div></body></html>";
/// assert_eq!(strip_document_shell(html), "<div>X</div>");
/// ```
pub fn strip_document_shell(html: &str) -> String {
    let mut result = html.to_string();

    // Head goes first: style/script inside it must not be matched twice.
    result = SHELL_ONCE_PATTERNS[0].replace(&result, "").into_owned();

    for pattern in SHELL_ALL_PATTERNS.iter() {
        result = pattern.replace_all(&result, "").into_owned();
    }

    for pattern in SHELL_ONCE_PATTERNS.iter().skip(1) {
        result = pattern.replace(&result, "").into_owned();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOCUMENT: &str = "<!DOCTYPE html><html><head><title>T</title></head><body><div>X</div><script>alert(1)</script></body></html>";

    #[test]
    fn test_full_document_reduces_to_body_content() {
        assert_eq!(strip_document_shell(FULL_DOCUMENT), "<div>X</div>");
    }

    #[test]
    fn test_no_shell_substrings_remain() {
        let stripped = strip_document_shell(FULL_DOCUMENT);

        assert!(!stripped.contains("<head"));
        assert!(!stripped.contains("<style"));
        assert!(!stripped.contains("<script"));
        assert!(!stripped.contains("<html"));
        assert!(!stripped.contains("<body"));
        assert!(!stripped.contains("<!DOCTYPE"));
    }

    #[test]
    fn test_idempotent_on_stripped_fragment() {
        let once = strip_document_shell(FULL_DOCUMENT);
        let twice = strip_document_shell(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_plain_fragment_unchanged() {
        let fragment = "<div><p>already clean</p></div>";
        assert_eq!(strip_document_shell(fragment), fragment);
    }

    #[test]
    fn test_multiple_style_and_script_blocks_all_removed() {
        let html = "<body><style>a{}</style><p>1</p><style>b{}</style>\
                    <script>x()</script><p>2</p><script>y()</script></body>";

        assert_eq!(strip_document_shell(html), "<p>1</p><p>2</p>");
    }

    #[test]
    fn test_non_greedy_stops_at_nearest_close() {
        // Two sequential style blocks with content between them: non-greedy
        // matching must not swallow the text separating them.
        let html = "<style>a{}</style><em>keep</em><style>b{}</style>";
        assert_eq!(strip_document_shell(html), "<em>keep</em>");
    }

    #[test]
    fn test_style_script_removal_order_independent() {
        let html = "<body><style>a{}</style><div>X</div><script>y()</script></body>";

        // Remove scripts before styles by hand and compare with the
        // canonical order.
        let script_re = Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap();
        let style_re = Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap();
        let body_open = Regex::new(r"<body[^>]*>").unwrap();
        let body_close = Regex::new(r"</body>").unwrap();

        let mut reversed = script_re.replace_all(html, "").into_owned();
        reversed = style_re.replace_all(&reversed, "").into_owned();
        reversed = body_open.replace(&reversed, "").into_owned();
        reversed = body_close.replace(&reversed, "").into_owned();

        assert_eq!(strip_document_shell(html), reversed);
    }

    #[test]
    fn test_tags_with_attributes() {
        let html = r#"<html lang="en"><head data-x="1"><meta charset="utf-8"></head><body class="page"><span>S</span></body></html>"#;
        assert_eq!(strip_document_shell(html), "<span>S</span>");
    }

    #[test]
    fn test_multiline_head_block() {
        let html = "<html>\n<head>\n<title>T</title>\n<style>h1{}</style>\n</head>\n<body>\n<h1>Hi</h1>\n</body>\n</html>";
        assert_eq!(strip_document_shell(html).trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_uppercase_tags_left_alone() {
        // Matching is case-sensitive by contract.
        let html = "<HTML><BODY><div>X</div></BODY></HTML>";
        assert_eq!(strip_document_shell(html), html);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_document_shell(""), "");
    }
}
