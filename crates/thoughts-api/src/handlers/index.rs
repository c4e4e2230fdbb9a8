//! Route listing
//!
//! GET / describes every mounted route.

use axum::Json;

use crate::routes::{RouteInfo, ROUTES};

/// List every route the server answers
///
/// GET /
pub async fn list_routes() -> Json<&'static [RouteInfo]> {
    Json(ROUTES)
}
