use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::draft::{DraftVersionRow, ResumeDraftRow};
use crate::models::resume::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftVersion {
    pub draft_id: Uuid,
    pub version: i32,
}

/// Saves `resume` as the next version of `draft_id`.
/// CRITICAL: This is append-only. Never UPDATE existing rows.
pub async fn save_draft_version(
    pool: &PgPool,
    draft_id: Uuid,
    resume: &Resume,
) -> Result<DraftVersion> {
    let body = serde_json::to_value(resume).context("Failed to encode resume draft")?;

    let current_max: Option<i32> =
        sqlx::query_scalar("SELECT MAX(version) FROM resume_drafts WHERE draft_id = $1")
            .bind(draft_id)
            .fetch_one(pool)
            .await?;
    let new_version = current_max.unwrap_or(0) + 1;

    sqlx::query(
        r#"
        INSERT INTO resume_drafts (id, draft_id, version, resume)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft_id)
    .bind(new_version)
    .bind(&body)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to insert draft {draft_id} version {new_version}"))?;

    info!("Saved resume draft {draft_id} version {new_version}");

    Ok(DraftVersion {
        draft_id,
        version: new_version,
    })
}

/// Returns the most recent version of a draft, if it exists.
pub async fn get_latest_draft(pool: &PgPool, draft_id: Uuid) -> Result<Option<ResumeDraftRow>> {
    Ok(sqlx::query_as::<_, ResumeDraftRow>(
        r#"
        SELECT *
        FROM resume_drafts
        WHERE draft_id = $1
        ORDER BY version DESC
        LIMIT 1
        "#,
    )
    .bind(draft_id)
    .fetch_optional(pool)
    .await?)
}

/// Returns one specific version of a draft.
pub async fn get_draft_at_version(
    pool: &PgPool,
    draft_id: Uuid,
    version: i32,
) -> Result<Option<ResumeDraftRow>> {
    Ok(sqlx::query_as::<_, ResumeDraftRow>(
        "SELECT * FROM resume_drafts WHERE draft_id = $1 AND version = $2",
    )
    .bind(draft_id)
    .bind(version)
    .fetch_optional(pool)
    .await?)
}

/// Returns every saved version of a draft, oldest first.
pub async fn get_draft_history(pool: &PgPool, draft_id: Uuid) -> Result<Vec<DraftVersionRow>> {
    Ok(sqlx::query_as::<_, DraftVersionRow>(
        "SELECT version, created_at FROM resume_drafts WHERE draft_id = $1 ORDER BY version ASC",
    )
    .bind(draft_id)
    .fetch_all(pool)
    .await?)
}

/// Decodes the stored JSON body back into a `Resume`.
pub fn decode_resume(row: &ResumeDraftRow) -> Result<Resume> {
    serde_json::from_value(row.resume.clone()).with_context(|| {
        format!(
            "Stored draft {} version {} is not a valid resume",
            row.draft_id, row.version
        )
    })
}
