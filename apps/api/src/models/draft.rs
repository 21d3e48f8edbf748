use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One saved version of a resume draft. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeDraftRow {
    pub id: Uuid,
    pub draft_id: Uuid,
    pub version: i32,
    pub resume: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DraftVersionRow {
    pub version: i32,
    pub created_at: DateTime<Utc>,
}
