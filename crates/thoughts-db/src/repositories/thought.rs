//! PostgreSQL implementation of ThoughtRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use thoughts_core::{RepoResult, Snowflake, Thought, ThoughtRepository};

use crate::mappers::ThoughtInsert;
use crate::models::ThoughtModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ThoughtRepository
#[derive(Clone)]
pub struct PgThoughtRepository {
    pool: PgPool,
}

impl PgThoughtRepository {
    /// Create a new PgThoughtRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThoughtRepository for PgThoughtRepository {
    #[instrument(skip(self))]
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Thought>> {
        let rows = sqlx::query_as::<_, ThoughtModel>(
            r#"
            SELECT id, message, hearts, tag, name, created_at
            FROM thoughts
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Thought::try_from).collect()
    }

    #[instrument(skip(self, thought), fields(thought_id = %thought.id))]
    async fn create(&self, thought: &Thought) -> RepoResult<()> {
        let insert = ThoughtInsert::new(thought);

        sqlx::query(
            r#"
            INSERT INTO thoughts (id, message, hearts, tag, name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(insert.id)
        .bind(insert.message)
        .bind(insert.hearts)
        .bind(insert.tag)
        .bind(insert.name)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_hearts(&self, id: Snowflake) -> RepoResult<Option<Thought>> {
        // Single statement: concurrent likes are serialized by the row lock
        let row = sqlx::query_as::<_, ThoughtModel>(
            r#"
            UPDATE thoughts
            SET hearts = hearts + 1
            WHERE id = $1
            RETURNING id, message, hearts, tag, name, created_at
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Thought::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
