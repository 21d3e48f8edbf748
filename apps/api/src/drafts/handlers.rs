use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ats::handlers::{ensure_description, run_analysis, AnalyzeResponse};
use crate::drafts::versioning::{
    decode_resume, get_draft_at_version, get_draft_history, get_latest_draft, save_draft_version,
    DraftVersion,
};
use crate::errors::AppError;
use crate::models::draft::{DraftVersionRow, ResumeDraftRow};
use crate::models::resume::{JobDescription, Resume};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftResponse {
    pub draft_id: Uuid,
    pub version: i32,
}

impl From<DraftVersion> for SaveDraftResponse {
    fn from(v: DraftVersion) -> Self {
        Self {
            draft_id: v.draft_id,
            version: v.version,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft_id: Uuid,
    pub version: i32,
    pub resume: Resume,
    pub created_at: DateTime<Utc>,
}

impl DraftResponse {
    fn from_row(row: ResumeDraftRow) -> Result<Self, AppError> {
        let resume = decode_resume(&row)?;
        Ok(Self {
            draft_id: row.draft_id,
            version: row.version,
            resume,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeDraftRequest {
    pub job_description: JobDescription,
}

fn draft_not_found(draft_id: Uuid) -> AppError {
    AppError::NotFound(format!("Draft {draft_id} not found"))
}

/// POST /api/v1/drafts
pub async fn handle_create_draft(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<(StatusCode, Json<SaveDraftResponse>), AppError> {
    let saved = save_draft_version(&state.db, Uuid::new_v4(), &resume).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// PUT /api/v1/drafts/:id
///
/// Appends a new version; earlier versions stay readable.
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
    Json(resume): Json<Resume>,
) -> Result<Json<SaveDraftResponse>, AppError> {
    let saved = save_draft_version(&state.db, draft_id, &resume).await?;
    Ok(Json(saved.into()))
}

/// GET /api/v1/drafts/:id
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
) -> Result<Json<DraftResponse>, AppError> {
    let row = get_latest_draft(&state.db, draft_id)
        .await?
        .ok_or_else(|| draft_not_found(draft_id))?;
    Ok(Json(DraftResponse::from_row(row)?))
}

/// GET /api/v1/drafts/:id/history
pub async fn handle_draft_history(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
) -> Result<Json<Vec<DraftVersionRow>>, AppError> {
    let history = get_draft_history(&state.db, draft_id).await?;
    if history.is_empty() {
        return Err(draft_not_found(draft_id));
    }
    Ok(Json(history))
}

/// GET /api/v1/drafts/:id/version/:v
pub async fn handle_get_draft_version(
    State(state): State<AppState>,
    Path((draft_id, version)): Path<(Uuid, i32)>,
) -> Result<Json<DraftResponse>, AppError> {
    let row = get_draft_at_version(&state.db, draft_id, version)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Draft {draft_id} has no version {version}"))
        })?;
    Ok(Json(DraftResponse::from_row(row)?))
}

/// POST /api/v1/drafts/:id/analyze
///
/// Scores the latest saved version of a draft. The analysis is returned, not stored.
pub async fn handle_analyze_draft(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
    Json(request): Json<AnalyzeDraftRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    ensure_description(&request.job_description)?;

    let row = get_latest_draft(&state.db, draft_id)
        .await?
        .ok_or_else(|| draft_not_found(draft_id))?;
    let resume = decode_resume(&row)?;

    let response = run_analysis(state.analyzer.as_ref(), &resume, &request.job_description)?;
    Ok(Json(response))
}
