//! Thought entity - a short tagged message with a like counter

use chrono::{DateTime, SubsecRound, Utc};

use crate::entities::Tag;
use crate::validation::ValidThought;
use crate::value_objects::Snowflake;

/// Thought entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thought {
    pub id: Snowflake,
    pub message: String,
    pub hearts: i32,
    pub tag: Tag,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Thought {
    /// Create a new Thought from an already validated payload
    ///
    /// Hearts start at zero and `created_at` is stamped with the current time,
    /// truncated to the microsecond precision the store keeps.
    pub fn new(id: Snowflake, valid: ValidThought) -> Self {
        Self {
            id,
            message: valid.message,
            hearts: 0,
            tag: valid.tag,
            name: valid.name,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Register one like
    pub fn like(&mut self) {
        self.hearts = self.hearts.saturating_add(1);
    }
}
