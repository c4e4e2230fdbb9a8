//! Repository traits (ports)

mod repositories;

pub use repositories::{RepoResult, ThoughtRepository, RECENT_THOUGHTS_LIMIT};
