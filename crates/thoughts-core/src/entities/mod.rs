//! Domain entities - core business objects

mod tag;
mod thought;

pub use tag::{Tag, UnknownTag};
pub use thought::Thought;
