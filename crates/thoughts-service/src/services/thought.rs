//! Thought service
//!
//! Lists recent thoughts, creates new ones, and records likes. Each
//! operation makes at most one store round-trip, and creation only
//! reaches the store once validation has passed.

use thoughts_core::{DomainError, Snowflake, Thought, ThoughtInput, RECENT_THOUGHTS_LIMIT};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreateThoughtRequest, ThoughtResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Thought service
pub struct ThoughtService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThoughtService<'a> {
    /// Create a new ThoughtService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The most recent thoughts, newest first
    #[instrument(skip(self))]
    pub async fn list_recent(&self) -> ServiceResult<Vec<ThoughtResponse>> {
        let thoughts = self
            .ctx
            .thought_repo()
            .find_recent(RECENT_THOUGHTS_LIMIT)
            .await?;

        debug!(count = thoughts.len(), "Listed recent thoughts");

        Ok(thoughts.into_iter().map(ThoughtResponse::from).collect())
    }

    /// Validate and persist a new thought
    #[instrument(skip(self, request))]
    pub async fn create_thought(
        &self,
        request: CreateThoughtRequest,
    ) -> ServiceResult<ThoughtResponse> {
        let valid = ThoughtInput::from(request)
            .into_valid()
            .map_err(DomainError::from)?;

        let thought = Thought::new(self.ctx.generate_id(), valid);
        self.ctx.thought_repo().create(&thought).await?;

        info!(thought_id = %thought.id, tag = %thought.tag, "Thought created");

        Ok(ThoughtResponse::from(thought))
    }

    /// Add one heart to a thought and return its updated state
    ///
    /// `thought_id` is the raw path segment; a malformed id is rejected
    /// before the store is touched. An id that matches no row fails as a
    /// store error.
    #[instrument(skip(self))]
    pub async fn like_thought(&self, thought_id: &str) -> ServiceResult<ThoughtResponse> {
        let id = Snowflake::parse(thought_id)?;

        let thought = self
            .ctx
            .thought_repo()
            .increment_hearts(id)
            .await?
            .ok_or_else(|| DomainError::DatabaseError(format!("no thought matches id {id}")))?;

        info!(thought_id = %id, hearts = thought.hearts, "Thought liked");

        Ok(ThoughtResponse::from(thought))
    }

    /// Whether the store answers a trivial query
    #[instrument(skip(self))]
    pub async fn check_store(&self) -> bool {
        match self.ctx.thought_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        }
    }
}
