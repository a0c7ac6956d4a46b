//! Destination URL extraction from raw result anchors.
//!
//! Providers do not always link straight to the destination. DuckDuckGo's
//! HTML endpoint wraps every result in an internal redirect such as
//! `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`, where the
//! real URL is the percent-encoded `uddg` parameter.

use url::form_urlencoded;

/// Redirect parameter carrying the encoded destination.
const REDIRECT_PARAM: &str = "uddg";

/// Extract a navigable destination from a raw `href` attribute.
///
/// - Absolute `http://` / `https://` links are returned unchanged.
/// - Redirect wrappers (path starting with `/l/`, or any href carrying a
///   `uddg=` parameter) are unwrapped and percent-decoded.
/// - Everything else yields `None`, meaning the candidate must be skipped.
///
/// A decoded redirect target is only accepted when it is itself an absolute
/// http(s) URL.
///
/// # Examples
///
/// ```
/// use drichsearch_search::url_normalize::extract_target_url;
///
/// assert_eq!(
///     extract_target_url("/l/?kh=1&uddg=https%3A%2F%2Fexample.com%2Fpage").as_deref(),
///     Some("https://example.com/page"),
/// );
/// assert_eq!(extract_target_url("not a url"), None);
/// ```
pub fn extract_target_url(raw_href: &str) -> Option<String> {
    let href = raw_href.trim();
    if href.is_empty() {
        return None;
    }

    if is_absolute_http(href) {
        return Some(href.to_string());
    }

    if href.starts_with("/l/") || href.contains("uddg=") {
        return decode_redirect(href);
    }

    None
}

/// Pull the `uddg` parameter out of a redirect href and decode it.
fn decode_redirect(href: &str) -> Option<String> {
    let without_fragment = href.split('#').next().unwrap_or(href);
    let (_, query) = without_fragment.split_once('?')?;

    let target = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.trim().to_string())?;

    is_absolute_http(&target).then_some(target)
}

fn is_absolute_http(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
