//! Request DTOs for API endpoints

use serde::Deserialize;
use thoughts_core::ThoughtInput;

/// Create thought request
///
/// Fields are optional so that an absent field is reported by the
/// validator rather than rejected by the JSON decoder. Unknown fields,
/// including client-supplied `hearts` or `createdAt`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateThoughtRequest {
    pub message: Option<String>,
    pub tag: Option<String>,
    pub name: Option<String>,
}

impl From<CreateThoughtRequest> for ThoughtInput {
    fn from(request: CreateThoughtRequest) -> Self {
        Self {
            message: request.message,
            tag: request.tag,
            name: request.name,
        }
    }
}
