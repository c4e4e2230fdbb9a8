//! Schema bootstrap
//!
//! The service owns a single table. It is created on startup when missing,
//! so a fresh database needs no separate migration step.

use sqlx::PgPool;
use tracing::info;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS thoughts (
    id          BIGINT PRIMARY KEY,
    message     TEXT NOT NULL,
    hearts      INTEGER NOT NULL DEFAULT 0,
    tag         TEXT NOT NULL,
    name        TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_RECENT_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_thoughts_recent
    ON thoughts (created_at DESC, id DESC)
"#;

/// Create the thoughts table and its ordering index if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    sqlx::query(CREATE_RECENT_INDEX).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
