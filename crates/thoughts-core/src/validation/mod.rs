//! Validation of client-supplied thought payloads

mod thought;

pub use thought::{
    ThoughtInput, ValidThought, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS,
};
