//! Response DTOs for API endpoints
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thoughts_core::Tag;

/// Envelope used by the create and like endpoints
///
/// `response` is the thought on success and the error object on failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub response: T,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(response: T) -> Self {
        Self {
            response,
            success: true,
        }
    }

    pub fn failed(response: T) -> Self {
        Self {
            response,
            success: false,
        }
    }
}

/// Thought as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtResponse {
    pub id: String,
    pub message: String,
    pub hearts: i32,
    pub tag: Tag,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status of each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn from_store(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" },
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" },
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
