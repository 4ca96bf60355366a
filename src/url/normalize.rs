use url::{ParseError, Url};

/// Normalizes a URL for deduplication and comparison
///
/// # Normalization Steps
///
/// 1. Parse the URL; a scheme-less input is retried with `http://` prepended
/// 2. Drop the fragment and the query string
/// 3. Keep scheme, host and any explicit non-default port
/// 4. Strip trailing slashes from the path; an empty path becomes `/`
///
/// Input that cannot be parsed into a URL with a host is returned unchanged,
/// so callers must tolerate a normalization no-op. Normalizing an already
/// normalized URL yields the same string.
///
/// # Examples
///
/// ```
/// use site_keyword_scanner::url::normalize_url;
///
/// assert_eq!(normalize_url("https://example.com/docs/#intro"), "https://example.com/docs");
/// assert_eq!(normalize_url("example.com"), "http://example.com/");
/// assert_eq!(normalize_url("not a url"), "not a url");
/// ```
pub fn normalize_url(url_str: &str) -> String {
    match parse_with_default_scheme(url_str) {
        Some(url) => match netloc(&url) {
            Some(netloc) => format!("{}://{}{}", url.scheme(), netloc, normalize_path(url.path())),
            None => url_str.to_string(),
        },
        None => url_str.to_string(),
    }
}

/// Parses a URL, applying the default `http` scheme when none is present
pub(crate) fn parse_with_default_scheme(url_str: &str) -> Option<Url> {
    let trimmed = url_str.trim();
    match Url::parse(trimmed) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let candidate = if trimmed.starts_with("//") {
                format!("http:{}", trimmed)
            } else {
                format!("http://{}", trimmed)
            };
            Url::parse(&candidate).ok()
        }
        Err(_) => None,
    }
}

/// Host plus explicit non-default port, or `None` for host-less URLs
pub(crate) fn netloc(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
