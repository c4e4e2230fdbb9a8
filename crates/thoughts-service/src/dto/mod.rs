//! Data transfer objects
//!
//! Request DTOs are deserialized from HTTP bodies; response DTOs are what
//! the API serializes back. Ids travel as strings.

mod mappers;
pub mod requests;
pub mod responses;

pub use requests::CreateThoughtRequest;
pub use responses::{ApiResponse, HealthChecks, HealthResponse, ReadinessResponse, ThoughtResponse};
