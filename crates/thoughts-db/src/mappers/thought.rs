//! Thought entity <-> model mapper

use chrono::{DateTime, Utc};
use thoughts_core::{DomainError, Snowflake, Tag, Thought};

use crate::models::ThoughtModel;

/// Convert a row into a Thought entity
///
/// Fails only if the stored tag is not one the domain knows about.
impl TryFrom<ThoughtModel> for Thought {
    type Error = DomainError;

    fn try_from(model: ThoughtModel) -> Result<Self, Self::Error> {
        let tag = model.tag.parse::<Tag>().map_err(|e| {
            DomainError::DatabaseError(format!("thought {} has corrupt tag: {e}", model.id))
        })?;

        Ok(Thought {
            id: Snowflake::new(model.id),
            message: model.message,
            hearts: model.hearts,
            tag,
            name: model.name,
            created_at: model.created_at,
        })
    }
}

/// Values bound when inserting a Thought
pub struct ThoughtInsert<'a> {
    pub id: i64,
    pub message: &'a str,
    pub hearts: i32,
    pub tag: &'static str,
    pub name: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> ThoughtInsert<'a> {
    pub fn new(thought: &'a Thought) -> Self {
        Self {
            id: thought.id.into_inner(),
            message: &thought.message,
            hearts: thought.hearts,
            tag: thought.tag.as_str(),
            name: &thought.name,
            created_at: thought.created_at,
        }
    }
}
