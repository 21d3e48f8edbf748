//! Keyword extraction: single words plus a fixed catalog of multi-word phrases.

use std::collections::HashSet;

/// Multi-word phrases detected by plain substring containment on lowercased text.
pub const PHRASE_CATALOG: &[&str] = &[
    "project management",
    "data analysis",
    "customer service",
    "team leadership",
    "strategic planning",
    "budget management",
    "process improvement",
    "quality assurance",
    "software development",
    "machine learning",
    "data science",
    "digital marketing",
    "social media",
    "content marketing",
    "sales management",
    "business development",
];

/// Tokens must be strictly longer than this to count as keywords.
const MIN_TOKEN_LEN: usize = 2;

/// Deduplicated keywords in first-seen order.
///
/// Order carries no meaning of its own, but keeping it stable makes the
/// truncated matched/missing lists deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `keyword` unless already present. Returns whether it was new.
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.seen.contains(&keyword) {
            return false;
        }
        self.seen.insert(keyword.clone());
        self.ordered.push(keyword);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.seen.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

/// Extracts the keyword set of `text`: every word longer than two characters
/// followed by every catalog phrase found in it.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let lowered = text.to_lowercase();

    let mut keywords: KeywordSet = clean_for_words(&lowered)
        .split_whitespace()
        .filter(|word| word.len() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect();

    for phrase in extract_phrases(&lowered) {
        keywords.insert(phrase);
    }

    keywords
}

/// Catalog phrases occurring in already-lowercased text, in catalog order.
fn extract_phrases(lowered: &str) -> impl Iterator<Item = &'static str> + '_ {
    PHRASE_CATALOG
        .iter()
        .copied()
        .filter(move |phrase| lowered.contains(phrase))
}

/// Blanks out everything except ASCII word characters, hyphens and whitespace.
fn clean_for_words(lowered: &str) -> String {
    lowered
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}
