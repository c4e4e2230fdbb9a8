//! Route definitions
//!
//! Every mounted route is also described in [`ROUTES`], which backs the
//! listing served at `/`.

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::handlers::{health, index, thoughts};
use crate::state::AppState;

/// A mounted path and the methods it accepts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub methods: &'static [&'static str],
}

/// Mounted routes in declaration order
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        path: "/",
        methods: &["GET"],
    },
    RouteInfo {
        path: "/health",
        methods: &["GET"],
    },
    RouteInfo {
        path: "/health/ready",
        methods: &["GET"],
    },
    RouteInfo {
        path: "/thoughts",
        methods: &["GET", "POST"],
    },
    RouteInfo {
        path: "/thoughts/:thought_id/like",
        methods: &["POST"],
    },
];

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::list_routes))
        .merge(health_routes())
        .merge(thought_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Thought routes
fn thought_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/thoughts",
            get(thoughts::list_thoughts).post(thoughts::create_thought),
        )
        .route("/thoughts/:thought_id/like", post(thoughts::like_thought))
}
