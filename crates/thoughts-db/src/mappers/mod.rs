//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects
//! - `*Insert` structs: prepare entity data for database operations

mod thought;

pub use thought::ThoughtInsert;
