//! Independent numeric sub-scores. Each is a pure function of the resume or its text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::Resume;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Percentage of posting keywords covered by matched resume keywords.
///
/// Not rounded and not capped: fuzzy containment can match more resume
/// keywords than the posting has, pushing this past 100.
pub fn keyword_density(matched_count: usize, job_keyword_count: usize) -> f64 {
    matched_count as f64 / job_keyword_count.max(1) as f64 * 100.0
}

/// Penalty-based completeness of the essential sections and contact fields. 0–100.
pub fn format_score(resume: &Resume) -> u32 {
    let mut penalty = 0;
    if resume.experience.is_empty() {
        penalty += 20;
    }
    if resume.education.is_empty() {
        penalty += 10;
    }
    if resume.skills.is_empty() {
        penalty += 15;
    }
    if resume.personal_info.email.is_empty() {
        penalty += 10;
    }
    if resume.personal_info.phone.is_empty() {
        penalty += 5;
    }
    100u32.saturating_sub(penalty)
}

/// Rewards a 400–800 word resume; shorter and much longer ones score lower.
pub fn length_score(text: &str) -> u32 {
    match word_count(text) {
        n if n < 200 => 60,
        n if n < 400 => 80,
        n if n < 800 => 100,
        n if n < 1200 => 90,
        _ => 70,
    }
}

/// Shorter average sentences read better. 70–100.
pub fn readability_score(text: &str) -> u32 {
    let sentences = sentence_count(text).max(1);
    let avg_words_per_sentence = word_count(text) as f64 / sentences as f64;

    match avg_words_per_sentence {
        avg if avg < 15.0 => 100,
        avg if avg < 20.0 => 90,
        avg if avg < 25.0 => 80,
        _ => 70,
    }
}

/// Additive credit for the sections an ATS expects. 0–100.
///
/// The date bonus needs at least one experience entry, all of them dated; an
/// empty experience list earns nothing for dates.
pub fn structure_score(resume: &Resume) -> u32 {
    let mut score = 0;
    if !resume.personal_info.full_name.is_empty() {
        score += 10;
    }
    if !resume.personal_info.summary.is_empty() {
        score += 15;
    }
    if !resume.experience.is_empty() {
        score += 25;
    }
    if !resume.education.is_empty() {
        score += 20;
    }
    if !resume.skills.is_empty() {
        score += 20;
    }
    if !resume.experience.is_empty() && resume.experience.iter().all(|e| e.has_complete_dates()) {
        score += 10;
    }
    score
}

/// Pieces left after splitting on whitespace runs. Leading or trailing
/// whitespace adds an empty piece, and empty text counts as one.
pub fn word_count(text: &str) -> usize {
    WHITESPACE_RUN.split(text).count()
}

/// Pieces left after splitting on runs of sentence terminators; always at least one.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK.split(text).count()
}
