//! Database models - SQLx-compatible structs for PostgreSQL tables

mod thought;

pub use thought::ThoughtModel;
