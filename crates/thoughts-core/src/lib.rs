//! # thoughts-core
//!
//! Domain layer containing the `Thought` entity, the tag enumeration, the
//! creation validator, and the repository trait the store adapters implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Tag, Thought, UnknownTag};
pub use error::DomainError;
pub use traits::{RepoResult, ThoughtRepository, RECENT_THOUGHTS_LIMIT};
pub use validation::{
    ThoughtInput, ValidThought, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
