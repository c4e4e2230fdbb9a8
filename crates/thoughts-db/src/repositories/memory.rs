//! In-memory implementation of ThoughtRepository
//!
//! Keeps every thought in a vector behind a lock. Likes take the write lock
//! for the whole read-modify-write, which gives the same no-lost-update
//! guarantee as the single UPDATE statement used against PostgreSQL.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use thoughts_core::{DomainError, RepoResult, Snowflake, Thought, ThoughtRepository};

/// In-process thought store
#[derive(Debug)]
pub struct MemoryThoughtRepository {
    thoughts: RwLock<Vec<Thought>>,
    available: AtomicBool,
}

impl MemoryThoughtRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            thoughts: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the store going down (or coming back)
    ///
    /// While unavailable every operation fails with a database error.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored thoughts
    pub fn len(&self) -> usize {
        self.thoughts.read().len()
    }

    /// Check if nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.thoughts.read().is_empty()
    }

    fn ensure_available(&self) -> RepoResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::DatabaseError(
                "connection refused: store unavailable".to_string(),
            ))
        }
    }
}

impl Default for MemoryThoughtRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThoughtRepository for MemoryThoughtRepository {
    #[instrument(skip(self))]
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Thought>> {
        self.ensure_available()?;

        let mut recent = self.thoughts.read().clone();
        recent.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        recent.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(recent)
    }

    #[instrument(skip(self, thought), fields(thought_id = %thought.id))]
    async fn create(&self, thought: &Thought) -> RepoResult<()> {
        self.ensure_available()?;

        let mut thoughts = self.thoughts.write();
        if thoughts.iter().any(|t| t.id == thought.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate key value violates unique constraint: id {}",
                thought.id
            )));
        }
        thoughts.push(thought.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_hearts(&self, id: Snowflake) -> RepoResult<Option<Thought>> {
        self.ensure_available()?;

        let mut thoughts = self.thoughts.write();
        Ok(thoughts.iter_mut().find(|t| t.id == id).map(|thought| {
            thought.like();
            thought.clone()
        }))
    }

    async fn ping(&self) -> RepoResult<()> {
        self.ensure_available()
    }
}
