//! Posting parser — turns pasted job-posting text into a `JobDescription`.
//!
//! The title defaults to the first non-blank line. The company comes from a
//! line mentioning "at <Company>", or else from the second line. Explicit
//! hints from the caller always win.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::AppError;
use crate::models::resume::JobDescription;

const DEFAULT_TITLE: &str = "Job Title";
const DEFAULT_COMPANY: &str = "Company";

static AT_COMPANY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)at\s+(.+)").unwrap());

/// Builds a `JobDescription` from raw posting text.
///
/// Fails with `AppError::Validation` when the text is empty or whitespace, so
/// the scorer is never handed a blank posting.
pub fn parse_posting(
    text: &str,
    title_hint: Option<&str>,
    company_hint: Option<&str>,
) -> Result<JobDescription, AppError> {
    let description = text.trim();
    if description.is_empty() {
        return Err(AppError::Validation(
            "job description text cannot be empty".to_string(),
        ));
    }

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let title = non_blank(title_hint)
        .map(str::to_string)
        .or_else(|| lines.first().map(|l| l.trim().to_string()))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let company = non_blank(company_hint)
        .map(str::to_string)
        .or_else(|| infer_company(&lines))
        .unwrap_or_else(|| DEFAULT_COMPANY.to_string());

    Ok(JobDescription {
        title,
        company,
        description: description.to_string(),
        requirements: vec![],
        keywords: vec![],
    })
}

fn non_blank(hint: Option<&str>) -> Option<&str> {
    hint.map(str::trim).filter(|h| !h.is_empty())
}

/// Needs at least two non-blank lines; a single line is taken as the title only.
fn infer_company(lines: &[&str]) -> Option<String> {
    if lines.len() < 2 {
        return None;
    }
    let line = lines
        .iter()
        .find(|l| l.to_lowercase().contains("at "))
        .unwrap_or(&lines[1]);

    let company = match AT_COMPANY.captures(line) {
        Some(caps) => caps[1].trim().to_string(),
        None => line.trim().to_string(),
    };
    Some(company).filter(|c| !c.is_empty())
}
