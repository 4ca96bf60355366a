use super::normalize::{netloc, parse_with_default_scheme};

/// Extracts the network location (host plus explicit port) from a URL
///
/// Scheme-less input is accepted the same way [`super::normalize_url`]
/// accepts it. Returns `None` for URLs without a host (`mailto:`, `data:`,
/// unparseable input).
///
/// # Examples
///
/// ```
/// use site_keyword_scanner::url::extract_netloc;
///
/// assert_eq!(extract_netloc("https://example.com/path"), Some("example.com".to_string()));
/// assert_eq!(extract_netloc("http://127.0.0.1:8080/"), Some("127.0.0.1:8080".to_string()));
/// assert_eq!(extract_netloc("mailto:someone@example.com"), None);
/// ```
pub fn extract_netloc(url_str: &str) -> Option<String> {
    parse_with_default_scheme(url_str).and_then(|url| netloc(&url))
}

/// Returns true if `url_str` lives on the given origin
///
/// A URL without a host is never same-origin.
pub fn is_same_origin(url_str: &str, origin: &str) -> bool {
    extract_netloc(url_str).is_some_and(|n| n == origin)
}
