//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with thought_id
///
/// The id is kept as raw text; whether it is a well-formed thought id is
/// decided by the service so the error code stays consistent.
#[derive(Debug, Deserialize)]
pub struct ThoughtIdPath {
    pub thought_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for ThoughtIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<ThoughtIdPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(inner)
    }
}
