//! Repository implementations
//!
//! PostgreSQL implementation of the repository traits defined in thoughts-core,
//! plus an in-process store for tests and local runs without a database.

mod error;
mod memory;
mod thought;

pub use memory::MemoryThoughtRepository;
pub use thought::PgThoughtRepository;
