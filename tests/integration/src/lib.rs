//! Integration test utilities for the Happy Thoughts API
//!
//! Spawns the real router on a local port, backed either by the in-memory
//! repository or by PostgreSQL when `DATABASE_URL` is set.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
