//! Keyword counting over extracted text
//!
//! Matching is plain substring counting, case-insensitive because both the
//! extracted text and the keywords are lowercased before they get here.

/// Strategy for counting keyword occurrences in a piece of text
pub trait KeywordMatcher {
    /// Returns how many times `keyword` occurs in `text`
    fn count(&self, text: &str, keyword: &str) -> usize;
}

/// Counts non-overlapping substring occurrences (`"aaaa"` holds `"aa"` twice)
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl KeywordMatcher for SubstringMatcher {
    fn count(&self, text: &str, keyword: &str) -> usize {
        if keyword.is_empty() {
            return 0;
        }
        text.matches(keyword).count()
    }
}

/// Keyword to occurrence count mapping that keeps first-seen keyword order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    entries: Vec<(String, usize)>,
}

impl KeywordCounts {
    /// Sets the count for a keyword; a repeated keyword keeps its position
    /// and takes the latest value
    fn insert(&mut self, keyword: &str, count: usize) {
        match self.entries.iter_mut().find(|(k, _)| k == keyword) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((keyword.to_string(), count)),
        }
    }

    /// Returns the count for a keyword, if it was counted
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, c)| *c)
    }

    /// Iterates over all keywords with their counts, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Iterates over keywords that occurred at least once
    pub fn matches(&self) -> impl Iterator<Item = (&str, usize)> {
        self.iter().filter(|(_, c)| *c > 0)
    }

    /// Number of distinct keywords counted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keywords were counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts each keyword in `text` using substring matching
///
/// # Examples
///
/// ```
/// use site_keyword_scanner::keywords::count_keywords;
///
/// let counts = count_keywords("foofoo", &["foo".to_string()]);
/// assert_eq!(counts.get("foo"), Some(2));
/// ```
pub fn count_keywords(text: &str, keywords: &[String]) -> KeywordCounts {
    count_keywords_with(&SubstringMatcher, text, keywords)
}

/// Counts each keyword in `text` using the given matching strategy
pub fn count_keywords_with<M: KeywordMatcher + ?Sized>(
    matcher: &M,
    text: &str,
    keywords: &[String],
) -> KeywordCounts {
    let mut counts = KeywordCounts::default();
    for keyword in keywords {
        counts.insert(keyword, matcher.count(text, keyword));
    }
    counts
}
