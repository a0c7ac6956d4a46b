//! Two-column comparison page rendering.
//!
//! Produces a self-contained HTML document (inline stylesheet, no script)
//! with one labeled column per source. Every extracted string is escaped
//! before it is embedded, since titles, links and snippets come straight
//! from scraped third-party markup.

use crate::types::{SearchResult, Source};

/// Maximum characters of the link shown under a title.
pub const DISPLAY_LINK_CHARS: usize = 70;

/// Maximum characters of the snippet shown under a link.
pub const DISPLAY_SNIPPET_CHARS: usize = 150;

const ELLIPSIS: &str = "...";
const NO_RESULTS: &str = "No results found";
const NO_DESCRIPTION: &str = "No description";

const STYLESHEET: &str = r#"
  body { font-family: Arial, Helvetica, sans-serif; margin: 20px; background: #121212; color: #eaeaea; }
  .columns { display: flex; gap: 20px; align-items: flex-start; }
  .column { flex: 1; min-width: 0; background: #1e1e1e; border: 1px solid #3a3a3a; border-radius: 8px; padding: 15px; }
  .column h2 { margin: 0 0 12px 0; font-size: 16px; color: #9aa0a6; text-transform: uppercase; letter-spacing: 0.05em; }
  .result { margin-bottom: 18px; padding-bottom: 14px; border-bottom: 1px solid #2a2a2a; }
  .result:last-child { border-bottom: none; }
  .result a { display: block; margin-bottom: 4px; color: #8ab4f8; font-size: 18px; font-weight: bold; text-decoration: none; }
  .result a:hover { text-decoration: underline; }
  .result .link { margin: 2px 0; color: #81c995; font-size: 14px; word-break: break-all; }
  .result .snippet { margin: 4px 0; color: #bdc1c6; line-height: 1.5; }
  .result .snippet.empty { font-style: italic; color: #80868b; }
  .no-results { padding: 20px; text-align: center; font-style: italic; color: #80868b; }
"#;

/// Render DuckDuckGo results on the left and Yahoo results on the right.
///
/// # Examples
///
/// ```
/// use drichsearch_search::{render, SearchResult};
///
/// let page = render(&[SearchResult::new("A", "http://a.test", "s")], &[]);
/// assert!(page.contains(r#"href="http://a.test""#));
/// assert!(page.contains("No results found"));
/// ```
#[must_use]
pub fn render(first: &[SearchResult], second: &[SearchResult]) -> String {
    render_labeled(
        Source::DuckDuckGo.name(),
        first,
        Source::Yahoo.name(),
        second,
    )
}

/// Render two result sets side by side under explicit column labels.
#[must_use]
pub fn render_labeled(
    first_label: &str,
    first: &[SearchResult],
    second_label: &str,
    second: &[SearchResult],
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} / {}</title>\n",
        html_escape(first_label),
        html_escape(second_label)
    ));
    html.push_str("<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(r#"<div class="columns">"#);
    render_column(&mut html, first_label, first);
    render_column(&mut html, second_label, second);
    html.push_str("</div>\n"); // columns

    html.push_str("</body>\n</html>\n");
    html
}

fn render_column(html: &mut String, label: &str, results: &[SearchResult]) {
    html.push_str(&format!(
        "\n<section class=\"column\" data-source=\"{}\">\n<h2>{}</h2>\n",
        html_escape(&label.to_lowercase()),
        html_escape(label)
    ));

    if results.is_empty() {
        html.push_str(&format!("<div class=\"no-results\">{NO_RESULTS}</div>\n"));
    }
    for result in results {
        render_entry(html, result);
    }

    html.push_str("</section>\n");
}

fn render_entry(html: &mut String, result: &SearchResult) {
    html.push_str("<div class=\"result\">\n");
    html.push_str(&format!(
        "  <a href=\"{}\">{}</a>\n",
        html_escape(safe_href(&result.link)),
        html_escape(&result.title)
    ));
    html.push_str(&format!(
        "  <p class=\"link\">{}</p>\n",
        html_escape(&truncate_display(&result.link, DISPLAY_LINK_CHARS))
    ));
    if result.snippet.is_empty() {
        html.push_str(&format!(
            "  <p class=\"snippet empty\">{NO_DESCRIPTION}</p>\n"
        ));
    } else {
        html.push_str(&format!(
            "  <p class=\"snippet\">{}</p>\n",
            html_escape(&truncate_display(&result.snippet, DISPLAY_SNIPPET_CHARS))
        ));
    }
    html.push_str("</div>\n");
}

/// Only http(s) destinations become live links.
fn safe_href(link: &str) -> &str {
    if link.starts_with("http://") || link.starts_with("https://") {
        link
    } else {
        "#"
    }
}

/// Shorten to `max_chars` characters, marking the cut with an ellipsis.
/// Text that already fits is returned untouched.
fn truncate_display(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{ELLIPSIS}", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_count(html: &str) -> usize {
        html.matches("<div class=\"result\">").count()
    }

    fn columns(html: &str) -> Vec<&str> {
        html.split("<section class=\"column\"").skip(1).collect()
    }

    #[test]
    fn empty_sets_render_two_placeholders() {
        let html = render(&[], &[]);
        assert_eq!(html.matches(NO_RESULTS).count(), 2);
        assert_eq!(entry_count(&html), 0);
    }

    #[test]
    fn single_result_lands_in_first_column() {
        let html = render(&[SearchResult::new("A", "http://a.test", "s")], &[]);
        let cols = columns(&html);
        assert_eq!(cols.len(), 2);
        assert_eq!(entry_count(cols[0]), 1);
        assert!(!cols[0].contains(NO_RESULTS));
        assert_eq!(entry_count(cols[1]), 0);
        assert!(cols[1].contains(NO_RESULTS));
    }

    #[test]
    fn columns_are_labeled_in_order() {
        let html = render(&[], &[]);
        let cols = columns(&html);
        assert!(cols[0].contains("<h2>DuckDuckGo</h2>"));
        assert!(cols[1].contains("<h2>Yahoo</h2>"));
    }

    #[test]
    fn custom_labels_are_escaped() {
        let html = render_labeled("Left <1>", &[], "Right & co", &[]);
        assert!(html.contains("<h2>Left &lt;1&gt;</h2>"));
        assert!(html.contains("<h2>Right &amp; co</h2>"));
    }

    #[test]
    fn entry_links_to_result() {
        let html = render(
            &[SearchResult::new("Rust", "https://www.rust-lang.org/", "Fast.")],
            &[],
        );
        assert!(html.contains(r#"<a href="https://www.rust-lang.org/">Rust</a>"#));
        assert!(html.contains(r#"<p class="link">https://www.rust-lang.org/</p>"#));
        assert!(html.contains(r#"<p class="snippet">Fast.</p>"#));
    }

    #[test]
    fn document_embeds_no_script() {
        let html = render(&[SearchResult::new("A", "http://a.test", "s")], &[]);
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn scraped_markup_is_escaped() {
        let hostile = SearchResult::new(
            "<script>alert(1)</script>",
            "https://evil.test/?a=1&b=\"><img src=x onerror=alert(1)>",
            "<b>bold</b> & 'quoted'",
        );
        let html = render(&[hostile], &[]);
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; &#x27;quoted&#x27;"));
        assert!(html.contains("a=1&amp;b=&quot;&gt;"));
    }

    #[test]
    fn non_http_link_is_neutralised() {
        let html = render(&[SearchResult::new("X", "javascript:alert(1)", "")], &[]);
        assert!(html.contains(r##"<a href="#">X</a>"##));
    }

    #[test]
    fn empty_snippet_renders_placeholder() {
        let html = render(&[], &[SearchResult::new("Y", "https://y.test/", "")]);
        assert!(html.contains(NO_DESCRIPTION));
    }

    #[test]
    fn long_link_is_truncated_with_ellipsis() {
        let link = format!("https://example.com/{}", "a".repeat(100));
        let html = render(&[SearchResult::new("Long", link.as_str(), "")], &[]);
        let shown = format!("{}...", &link[..DISPLAY_LINK_CHARS]);
        assert!(html.contains(&format!("<p class=\"link\">{shown}</p>")));
    }

    #[test]
    fn long_snippet_is_truncated_with_ellipsis() {
        let snippet = "word ".repeat(60);
        let html = render(&[SearchResult::new("S", "https://s.test/", snippet.as_str())], &[]);
        let shown = format!("{}...", &snippet[..DISPLAY_SNIPPET_CHARS]);
        assert!(html.contains(&shown));
    }

    #[test]
    fn short_fields_get_no_ellipsis() {
        let html = render(&[SearchResult::new("A", "http://a.test", "short")], &[]);
        assert!(html.contains(r#"<p class="link">http://a.test</p>"#));
        assert!(html.contains(r#"<p class="snippet">short</p>"#));
        assert!(!html.contains("a.test..."));
        assert!(!html.contains("short..."));
    }

    #[test]
    fn truncate_display_respects_char_boundaries() {
        assert_eq!(truncate_display("ééééé", 3), "ééé...");
        assert_eq!(truncate_display("abc", 3), "abc");
    }

    #[test]
    fn html_escape_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quote\""), "&quot;quote&quot;");
    }
}
