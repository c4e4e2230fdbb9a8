//! Thought database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the thoughts table
#[derive(Debug, Clone, FromRow)]
pub struct ThoughtModel {
    pub id: i64,
    pub message: String,
    pub hearts: i32,
    pub tag: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
