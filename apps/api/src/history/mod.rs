//! Generation history — stores `(request, suggestions)` per caller.
//!
//! Runs after the response has been produced; a failure here is logged by
//! the caller and never changes the HTTP outcome.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::history::GenerationHistoryRow;
use crate::models::homyo::{NameRequest, NameSuggestion};
use crate::models::user::CallerIdentity;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn record(
        &self,
        caller: &CallerIdentity,
        request: &NameRequest,
        suggestions: &[NameSuggestion],
    ) -> Result<GenerationHistoryRow, AppError>;
}

/// Postgres-backed store writing to `generation_history`.
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn record(
        &self,
        caller: &CallerIdentity,
        request: &NameRequest,
        suggestions: &[NameSuggestion],
    ) -> Result<GenerationHistoryRow, AppError> {
        let input_data =
            serde_json::to_value(request).context("Failed to encode generation input")?;
        let generated_names =
            serde_json::to_value(suggestions).context("Failed to encode generated names")?;

        let row = sqlx::query_as::<_, GenerationHistoryRow>(
            r#"
            INSERT INTO generation_history (id, user_id, input_data, generated_names)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, input_data, generated_names, is_favorited, created_at
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(caller.id)
        .bind(input_data)
        .bind(generated_names)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
