//! Axum extractors for request handling
//!
//! Both extractors reject with [`ApiError`](crate::response::ApiError) so
//! that malformed input is reported in the usual envelope.

mod json;
mod path;

pub use json::JsonBody;
pub use path::ThoughtIdPath;
