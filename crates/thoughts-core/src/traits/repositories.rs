//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the store, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::Thought;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Maximum number of thoughts returned by a listing
pub const RECENT_THOUGHTS_LIMIT: i64 = 20;

#[async_trait]
pub trait ThoughtRepository: Send + Sync {
    /// List the most recent thoughts, newest first
    ///
    /// Ordered by `created_at` descending with ties broken by id descending.
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Thought>>;

    /// Persist a new, already validated thought
    async fn create(&self, thought: &Thought) -> RepoResult<()>;

    /// Add one heart and return the updated thought
    ///
    /// Must be a single atomic store operation; `Ok(None)` when no thought has this id.
    async fn increment_hearts(&self, id: Snowflake) -> RepoResult<Option<Thought>>;

    /// Verify the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
