//! Service context - dependency container for services

use std::sync::Arc;

use thoughts_core::{Snowflake, SnowflakeGenerator, ThoughtRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; the repository and the id generator are shared.
#[derive(Clone)]
pub struct ServiceContext {
    thought_repo: Arc<dyn ThoughtRepository>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        thought_repo: Arc<dyn ThoughtRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            thought_repo,
            snowflake_generator,
        }
    }

    /// Get the thought repository
    pub fn thought_repo(&self) -> &dyn ThoughtRepository {
        self.thought_repo.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("thought_repo", &"dyn ThoughtRepository")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    thought_repo: Option<Arc<dyn ThoughtRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thought_repo(mut self, repo: Arc<dyn ThoughtRepository>) -> Self {
        self.thought_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the repository is missing.
    /// A missing generator falls back to worker 0.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let thought_repo = self
            .thought_repo
            .ok_or_else(|| ServiceError::validation("thought_repo is required"))?;
        let snowflake_generator = self.snowflake_generator.unwrap_or_default();

        Ok(ServiceContext::new(thought_repo, snowflake_generator))
    }
}
