//! Business logic services
//!
//! Services validate input, orchestrate repository calls, and map entities
//! to response DTOs.

pub mod context;
pub mod error;
pub mod thought;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use thought::ThoughtService;
