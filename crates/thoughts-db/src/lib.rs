//! # thoughts-db
//!
//! Database layer implementing [`ThoughtRepository`](thoughts_core::ThoughtRepository)
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Schema bootstrap (`thoughts` table and its ordering index)
//! - Database model with SQLx `FromRow` derive
//! - Entity ↔ Model mappers
//! - Repository implementations (PostgreSQL and in-memory)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use thoughts_db::{create_pool, ensure_schema, DatabaseConfig, PgThoughtRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let repo = PgThoughtRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{MemoryThoughtRepository, PgThoughtRepository};
pub use schema::ensure_schema;
