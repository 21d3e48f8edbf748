//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::analyzer::{Analysis, ResumeAnalyzer, ScoreBand};
use crate::ats::jd_parser::parse_posting;
use crate::errors::AppError;
use crate::models::resume::{JobDescription, Resume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume: Resume,
    pub job_description: JobDescription,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
    pub band: ScoreBand,
}

#[derive(Debug, Deserialize)]
pub struct ParsePostingRequest {
    pub text: String,
    pub title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsePostingResponse {
    pub job_description: JobDescription,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores a resume against a job description. Nothing is stored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let response = run_analysis(
        state.analyzer.as_ref(),
        &request.resume,
        &request.job_description,
    )?;
    Ok(Json(response))
}

/// POST /api/v1/ats/job-description
///
/// Turns pasted posting text into a JobDescription, inferring title and company.
pub async fn handle_parse_posting(
    Json(request): Json<ParsePostingRequest>,
) -> Result<Json<ParsePostingResponse>, AppError> {
    let job_description = parse_posting(
        &request.text,
        request.title.as_deref(),
        request.company.as_deref(),
    )?;
    Ok(Json(ParsePostingResponse { job_description }))
}

/// The scorer must never see a blank posting; callers check before any other work.
pub fn ensure_description(job: &JobDescription) -> Result<(), AppError> {
    if job.description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription.description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Guards against blank postings, then runs the analyzer.
pub fn run_analysis(
    analyzer: &dyn ResumeAnalyzer,
    resume: &Resume,
    job: &JobDescription,
) -> Result<AnalyzeResponse, AppError> {
    ensure_description(job)?;

    let analysis = analyzer.analyze(resume, job);
    let band = ScoreBand::from_score(analysis.score);
    info!(
        backend = analyzer.backend(),
        score = analysis.score,
        matched = analysis.matched_keywords.len(),
        missing = analysis.missing_keywords.len(),
        "Resume analyzed"
    );

    Ok(AnalyzeResponse { analysis, band })
}
