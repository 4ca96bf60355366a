use super::normalize::parse_with_default_scheme;
use serde::Serialize;
use std::fmt;

/// Suffixes that mark a discovered link as a document to fetch ahead of
/// further HTML traversal
const PRIORITY_SUFFIXES: &[&str] = &[".pdf", ".docx", ".txt"];

/// Content type of a crawled resource, selecting its text extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Html,
    Pdf,
    Docx,
    Txt,
}

impl ContentType {
    /// Upper-case tag used in progress lines and CSV rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
        }
    }

    /// Returns true for types fetched with the longer document timeout
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Pdf | Self::Docx)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a URL by the media type guessed from its path suffix
///
/// | Guessed media type contains | Result |
/// |-----------------------------|--------|
/// | `pdf`                       | PDF    |
/// | `word`                      | DOCX   |
/// | `text`                      | TXT    |
/// | anything else / no guess    | HTML   |
///
/// Note that `.html` guesses `text/html` and therefore classifies as TXT.
///
/// # Examples
///
/// ```
/// use site_keyword_scanner::url::{classify, ContentType};
///
/// assert_eq!(classify("https://example.com/report.pdf"), ContentType::Pdf);
/// assert_eq!(classify("https://example.com/about"), ContentType::Html);
/// ```
pub fn classify(url_str: &str) -> ContentType {
    let guessed = match parse_with_default_scheme(url_str) {
        Some(url) => mime_guess::from_path(url.path()).first(),
        None => mime_guess::from_path(url_str).first(),
    };

    let Some(mime) = guessed else {
        return ContentType::Html;
    };

    let essence = mime.essence_str();
    if essence.contains("pdf") {
        ContentType::Pdf
    } else if essence.contains("word") {
        ContentType::Docx
    } else if essence.contains("text") {
        ContentType::Txt
    } else {
        ContentType::Html
    }
}

/// Returns true if a link should jump the frontier queue
///
/// Decided on a case-insensitive suffix test, independent of [`classify`].
pub fn is_priority_document(url_str: &str) -> bool {
    let lower = url_str.to_lowercase();
    PRIORITY_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}
