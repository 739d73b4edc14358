use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored generation: the request as submitted and the repaired names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GenerationHistoryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub input_data: Value,
    pub generated_names: Value,
    pub is_favorited: bool,
    pub created_at: DateTime<Utc>,
}
