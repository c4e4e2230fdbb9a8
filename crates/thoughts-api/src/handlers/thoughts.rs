//! Thought handlers
//!
//! Endpoints for listing, creating, and liking thoughts.

use axum::{extract::State, Json};
use thoughts_service::{CreateThoughtRequest, ThoughtResponse, ThoughtService};

use crate::extractors::{JsonBody, ThoughtIdPath};
use crate::response::{ApiResult, Created, Envelope, Rejected};
use crate::state::AppState;

/// List the most recent thoughts, newest first
///
/// GET /thoughts
pub async fn list_thoughts(State(state): State<AppState>) -> ApiResult<Json<Vec<ThoughtResponse>>> {
    let service = ThoughtService::new(state.service_context());
    let thoughts = service.list_recent().await?;
    Ok(Json(thoughts))
}

/// Create a thought
///
/// POST /thoughts
pub async fn create_thought(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateThoughtRequest>,
) -> Result<Created<Envelope<ThoughtResponse>>, Rejected> {
    let service = ThoughtService::new(state.service_context());
    let thought = service.create_thought(request).await?;
    Ok(Created(Envelope(thought)))
}

/// Add one heart to a thought
///
/// POST /thoughts/:thought_id/like
pub async fn like_thought(
    State(state): State<AppState>,
    path: ThoughtIdPath,
) -> Result<Envelope<ThoughtResponse>, Rejected> {
    let service = ThoughtService::new(state.service_context());
    let thought = service.like_thought(&path.thought_id).await?;
    Ok(Envelope(thought))
}
