use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_HISTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS generation_history (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL,
    input_data JSONB NOT NULL,
    generated_names JSONB NOT NULL,
    is_favorited BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_HISTORY_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS generation_history_user_created
    ON generation_history (user_id, created_at DESC)
"#;

/// Creates a PostgreSQL pool and makes sure the history table exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::query(CREATE_HISTORY_TABLE).execute(&pool).await?;
    sqlx::query(CREATE_HISTORY_INDEX).execute(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
