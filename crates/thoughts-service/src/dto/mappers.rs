//! Entity to DTO mappers

use thoughts_core::Thought;

use super::responses::ThoughtResponse;

impl From<Thought> for ThoughtResponse {
    fn from(thought: Thought) -> Self {
        Self {
            id: thought.id.to_string(),
            message: thought.message,
            hearts: thought.hearts,
            tag: thought.tag,
            name: thought.name,
            created_at: thought.created_at,
        }
    }
}
