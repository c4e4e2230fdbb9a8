//! # thoughts-service
//!
//! Application layer containing the thought use cases, the dependency
//! container they run against, and the request/response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, CreateThoughtRequest, HealthResponse, ReadinessResponse, ThoughtResponse,
};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, ThoughtService,
};
