//! ATS analysis — combines keyword matching and sub-scores into one score with suggestions.
//!
//! `analyze` is pure and deterministic: no I/O, no state between calls.
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` so the backend can be swapped
//! without touching handlers.

use serde::{Deserialize, Serialize};

use crate::ats::matcher::{match_keywords, KeywordMatch};
use crate::ats::subscores::{
    format_score, keyword_density, length_score, readability_score, structure_score,
};
use crate::ats::tokenizer::extract_keywords;
use crate::models::resume::{JobDescription, Resume};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    /// Percentage, unrounded and uncapped.
    pub keyword_density: f64,
    pub format_score: u32,
    pub length_score: u32,
    pub readability_score: u32,
}

/// Result of scoring one resume against one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Weighted total. Not clamped: very high keyword density can push it past 100.
    pub score: u32,
    pub matched_keywords: Vec<String>, // ≤ 15
    pub missing_keywords: Vec<String>, // ≤ 10
    pub suggestions: Vec<String>,
    pub sub_scores: SubScores,
}

/// Qualitative bucket for presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Pluggable analyzer backend, carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
pub trait ResumeAnalyzer: Send + Sync {
    fn analyze(&self, resume: &Resume, job: &JobDescription) -> Analysis;

    /// Short backend label, logged with each analysis.
    fn backend(&self) -> &'static str;
}

/// Keyword-containment analyzer. Fast, deterministic, no external calls.
pub struct KeywordAnalyzer;

impl ResumeAnalyzer for KeywordAnalyzer {
    fn analyze(&self, resume: &Resume, job: &JobDescription) -> Analysis {
        analyze(resume, job)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

const DENSITY_WEIGHT: f64 = 0.4;
const FORMAT_WEIGHT: f64 = 0.2;
const LENGTH_WEIGHT: f64 = 0.2;
const STRUCTURE_WEIGHT: f64 = 0.2;

const MIN_MATCHED_KEYWORDS: usize = 5;
const SUGGESTED_MISSING_KEYWORDS: usize = 5;
const MIN_SUMMARY_CHARS: usize = 100;
const MIN_BULLETS_PER_ROLE: usize = 2;
const MIN_SKILLS: usize = 8;

pub fn analyze(resume: &Resume, job: &JobDescription) -> Analysis {
    let text = resume_text(resume);
    let resume_keywords = extract_keywords(&text);
    let job_keywords = extract_keywords(&job.description);
    let keyword_match = match_keywords(&resume_keywords, &job_keywords);

    let density = keyword_density(keyword_match.matched.len(), job_keywords.len());
    let format = format_score(resume);
    let length = length_score(&text);
    let structure = structure_score(resume);

    let score = (density * DENSITY_WEIGHT
        + f64::from(format) * FORMAT_WEIGHT
        + f64::from(length) * LENGTH_WEIGHT
        + f64::from(structure) * STRUCTURE_WEIGHT)
        .round() as u32;

    let suggestions = build_suggestions(resume, &keyword_match);

    Analysis {
        score,
        matched_keywords: keyword_match.display_matched(),
        missing_keywords: keyword_match.missing,
        suggestions,
        sub_scores: SubScores {
            keyword_density: density,
            format_score: format,
            length_score: length,
            readability_score: readability_score(&text),
        },
    }
}

/// Flattens the scored fields into one space-joined string: name, summary,
/// experience, education, skills, custom sections.
pub fn resume_text(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut parts: Vec<String> = vec![info.full_name.clone(), info.summary.clone()];

    for exp in &resume.experience {
        parts.push(exp.company.clone());
        parts.push(exp.position.clone());
        parts.push(exp.description.join(" "));
    }
    for edu in &resume.education {
        parts.push(edu.institution.clone());
        parts.push(edu.degree.clone());
        parts.push(edu.field.clone());
    }
    for skill in &resume.skills {
        parts.push(skill.name.clone());
        parts.push(skill.category.clone());
    }
    for section in &resume.custom_sections {
        parts.push(section.title.clone());
        parts.push(section.content.clone());
    }

    parts.join(" ")
}

/// Actionable suggestions in a fixed order, each included only when its condition holds.
fn build_suggestions(resume: &Resume, keyword_match: &KeywordMatch) -> Vec<String> {
    let mut suggestions = Vec::new();

    if keyword_match.matched.len() < MIN_MATCHED_KEYWORDS {
        suggestions
            .push("Add more relevant keywords from the job description to your resume".to_string());
    }

    if !keyword_match.missing.is_empty() {
        let top_missing: Vec<&str> = keyword_match
            .missing
            .iter()
            .take(SUGGESTED_MISSING_KEYWORDS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding these keywords: {}",
            top_missing.join(", ")
        ));
    }

    if resume.personal_info.summary.chars().count() < MIN_SUMMARY_CHARS {
        suggestions.push("Expand your professional summary to 2-3 sentences".to_string());
    }

    if resume
        .experience
        .iter()
        .any(|exp| exp.description.len() < MIN_BULLETS_PER_ROLE)
    {
        suggestions
            .push("Add more bullet points to your work experience descriptions".to_string());
    }

    if resume.skills.len() < MIN_SKILLS {
        suggestions.push("Add more relevant skills to strengthen your profile".to_string());
    }

    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::matcher::{MAX_DISPLAY_MATCHED, MAX_MISSING};
    use crate::models::resume::{CustomSection, Education, Experience, PersonalInfo, Skill};

    const SCENARIO_JD: &str = "Looking for a software engineer with leadership and communication \
         skills, experience with JavaScript and SQL.";

    fn job(description: &str) -> JobDescription {
        JobDescription {
            title: "Software Engineer".to_string(),
            company: "Initech".to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Summary, one role with two bullets, eight skills, no education or contact details.
    fn scenario_resume() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                summary: "Experienced software engineer.".to_string(),
                ..Default::default()
            },
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Software Engineer".to_string(),
                description: vec!["Built systems".to_string(), "Led team".to_string()],
                ..Default::default()
            }],
            skills: [
                "JavaScript",
                "SQL",
                "Leadership",
                "Testing",
                "Docker",
                "Git",
                "Agile",
                "Communication",
            ]
            .into_iter()
            .map(skill)
            .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_matched_keywords() {
        let analysis = analyze(&scenario_resume(), &job(SCENARIO_JD));
        for expected in [
            "javascript",
            "sql",
            "leadership",
            "communication",
            "software",
            "engineer",
        ] {
            assert!(
                analysis.matched_keywords.iter().any(|k| k == expected),
                "expected {expected} in {:?}",
                analysis.matched_keywords
            );
        }
        // "experienced" contains the posting's "experience".
        assert!(analysis.matched_keywords.iter().any(|k| k == "experienced"));
        assert_eq!(analysis.matched_keywords.len(), 7);
    }

    #[test]
    fn test_scenario_missing_keywords_in_posting_order() {
        let analysis = analyze(&scenario_resume(), &job(SCENARIO_JD));
        assert_eq!(
            analysis.missing_keywords,
            vec!["looking", "for", "with", "and", "skills"]
        );
    }

    #[test]
    fn test_scenario_sub_scores_and_total() {
        let analysis = analyze(&scenario_resume(), &job(SCENARIO_JD));
        // No education (-10), no email (-10), no phone (-5).
        assert_eq!(analysis.sub_scores.format_score, 75);
        assert_eq!(analysis.sub_scores.length_score, 60);
        // 7 matched of 12 posting keywords.
        let expected_density = 7.0 / 12.0 * 100.0;
        assert!((analysis.sub_scores.keyword_density - expected_density).abs() < 1e-9);
        // structure: summary 15 + experience 25 + skills 20, undated role earns no bonus.
        assert_eq!(structure_score(&scenario_resume()), 60);
        // round(23.33 + 15 + 12 + 12)
        assert_eq!(analysis.score, 62);
    }

    #[test]
    fn test_scenario_suggestions() {
        let analysis = analyze(&scenario_resume(), &job(SCENARIO_JD));
        assert_eq!(
            analysis.suggestions,
            vec![
                "Consider adding these keywords: looking, for, with, and, skills".to_string(),
                "Expand your professional summary to 2-3 sentences".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_resume_scores() {
        let resume = Resume::default();
        let analysis = analyze(&resume, &job(SCENARIO_JD));
        assert_eq!(analysis.sub_scores.format_score, 40);
        assert_eq!(structure_score(&resume), 0);
        assert_eq!(analysis.sub_scores.keyword_density, 0.0);
        assert!(analysis.matched_keywords.is_empty());
        // round(0 + 40*0.2 + 60*0.2 + 0)
        assert_eq!(analysis.score, 20);
    }

    #[test]
    fn test_empty_resume_suggestions_skip_bullet_advice() {
        let analysis = analyze(&Resume::default(), &job(SCENARIO_JD));
        assert_eq!(analysis.suggestions.len(), 4);
        assert!(analysis.suggestions[0].starts_with("Add more relevant keywords"));
        assert!(analysis.suggestions[1].starts_with("Consider adding these keywords: "));
        assert!(analysis.suggestions[2].starts_with("Expand your professional summary"));
        assert!(analysis.suggestions[3].starts_with("Add more relevant skills"));
        assert!(!analysis
            .suggestions
            .iter()
            .any(|s| s.contains("bullet points")));
    }

    #[test]
    fn test_missing_suggestion_lists_first_five() {
        let analysis = analyze(
            &Resume::default(),
            &job("alpha bravo charlie delta echo foxtrot golf"),
        );
        assert!(analysis
            .suggestions
            .contains(&"Consider adding these keywords: alpha, bravo, charlie, delta, echo".to_string()));
        assert_eq!(analysis.missing_keywords.len(), 7);
    }

    #[test]
    fn test_single_bullet_role_triggers_bullet_suggestion() {
        let mut resume = scenario_resume();
        resume.experience[0].description.truncate(1);
        let analysis = analyze(&resume, &job(SCENARIO_JD));
        assert!(analysis
            .suggestions
            .contains(&"Add more bullet points to your work experience descriptions".to_string()));
    }

    #[test]
    fn test_empty_job_description_does_not_divide_by_zero() {
        let analysis = analyze(&scenario_resume(), &job("   "));
        assert_eq!(analysis.sub_scores.keyword_density, 0.0);
        assert!(analysis.matched_keywords.is_empty());
        assert!(analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_score_is_not_clamped_above_100() {
        let resume = Resume {
            personal_info: PersonalInfo {
                full_name: "Eng Engine".to_string(),
                summary: "Engineer engineering".to_string(),
                email: "e@x.io".to_string(),
                phone: "1".to_string(),
                ..Default::default()
            },
            experience: vec![Experience {
                start_date: "2020".to_string(),
                current: true,
                ..Default::default()
            }],
            education: vec![Education::default()],
            skills: vec![skill("Engineering")],
            ..Default::default()
        };
        let analysis = analyze(&resume, &job("Engineering"));
        // eng, engine, engineer and engineering all match the one posting keyword.
        assert_eq!(analysis.sub_scores.keyword_density, 400.0);
        // round(160 + 20 + 12 + 20)
        assert_eq!(analysis.score, 212);
        assert!(analysis.score > 100, "score was {}", analysis.score);
    }

    #[test]
    fn test_bounds_hold_for_large_inputs() {
        let skills: Vec<Skill> = (0..40).map(|i| skill(&format!("tool{i:02}"))).collect();
        let posting: Vec<String> = (0..40)
            .map(|i| format!("tool{i:02} need{i:02}"))
            .collect();
        let resume = Resume {
            skills,
            ..Default::default()
        };
        let analysis = analyze(&resume, &job(&posting.join(" ")));

        assert!(analysis.matched_keywords.len() <= MAX_DISPLAY_MATCHED);
        assert!(analysis.missing_keywords.len() <= MAX_MISSING);
        assert!(analysis.sub_scores.format_score <= 100);
        assert!((60..=100).contains(&analysis.sub_scores.length_score));
        assert!((70..=100).contains(&analysis.sub_scores.readability_score));
        assert!(structure_score(&resume) <= 100);
        // Density uses the full 40 matches, not the 15 shown.
        assert_eq!(analysis.sub_scores.keyword_density, 50.0);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let resume = scenario_resume();
        let posting = job(SCENARIO_JD);
        let first = analyze(&resume, &posting);
        for _ in 0..5 {
            assert_eq!(analyze(&resume, &posting), first);
        }
    }

    #[test]
    fn test_json_round_trip_gives_same_analysis() {
        let resume = scenario_resume();
        let posting = job(SCENARIO_JD);
        let encoded = serde_json::to_string(&resume).unwrap();
        let decoded: Resume = serde_json::from_str(&encoded).unwrap();
        assert_eq!(analyze(&decoded, &posting), analyze(&resume, &posting));
    }

    #[test]
    fn test_resume_text_field_order() {
        let resume = Resume {
            personal_info: PersonalInfo {
                full_name: "Name".to_string(),
                summary: "Summary".to_string(),
                ..Default::default()
            },
            experience: vec![Experience {
                company: "Co".to_string(),
                position: "Pos".to_string(),
                description: vec!["b1".to_string(), "b2".to_string()],
                ..Default::default()
            }],
            education: vec![Education {
                institution: "Uni".to_string(),
                degree: "BSc".to_string(),
                field: "CS".to_string(),
                ..Default::default()
            }],
            skills: vec![Skill {
                name: "Rust".to_string(),
                category: "Tech".to_string(),
                ..Default::default()
            }],
            custom_sections: vec![CustomSection {
                title: "Awards".to_string(),
                content: "Prize".to_string(),
                ..Default::default()
            }],
        };
        assert_eq!(
            resume_text(&resume),
            "Name Summary Co Pos b1 b2 Uni BSc CS Rust Tech Awards Prize"
        );
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = analyze(&scenario_resume(), &job(SCENARIO_JD));
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("matchedKeywords").is_some());
        assert!(json.get("missingKeywords").is_some());
        assert!(json["subScores"].get("keywordDensity").is_some());
        assert!(json["subScores"].get("readabilityScore").is_some());
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Low);
    }

    #[test]
    fn test_keyword_analyzer_backend_label() {
        assert_eq!(KeywordAnalyzer.backend(), "keyword");
    }
}
