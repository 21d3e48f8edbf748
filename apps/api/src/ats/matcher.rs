//! Resume-vs-posting keyword matching by exact or substring containment.
//!
//! The containment rule runs both ways on purpose: "manage" matches
//! "management" and "engineering" matches "engineer". This over-matches short
//! tokens and keyword density can exceed 100% as a result. No stemming is
//! applied.

use crate::ats::tokenizer::KeywordSet;

/// Matched keywords shown to the user.
pub const MAX_DISPLAY_MATCHED: usize = 15;
/// Missing keywords kept after matching.
pub const MAX_MISSING: usize = 10;

/// Outcome of comparing resume keywords against posting keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    /// Every resume keyword that matches some posting keyword, in resume order.
    /// Untruncated: this is what keyword density is computed from.
    pub matched: Vec<String>,
    /// Posting keywords nothing in the resume matches, in posting order, at most `MAX_MISSING`.
    pub missing: Vec<String>,
}

impl KeywordMatch {
    /// The first `MAX_DISPLAY_MATCHED` matched keywords.
    pub fn display_matched(&self) -> Vec<String> {
        self.matched
            .iter()
            .take(MAX_DISPLAY_MATCHED)
            .cloned()
            .collect()
    }
}

/// Two keywords match when they are equal or either contains the other.
pub fn is_fuzzy_match(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

fn matches_any(keyword: &str, others: &KeywordSet) -> bool {
    others.contains(keyword) || others.iter().any(|other| is_fuzzy_match(keyword, other))
}

pub fn match_keywords(resume_keywords: &KeywordSet, job_keywords: &KeywordSet) -> KeywordMatch {
    let matched = resume_keywords
        .iter()
        .filter(|kw| matches_any(kw, job_keywords))
        .map(str::to_string)
        .collect();

    let missing = job_keywords
        .iter()
        .filter(|kw| !matches_any(kw, resume_keywords))
        .take(MAX_MISSING)
        .map(str::to_string)
        .collect();

    KeywordMatch { matched, missing }
}
