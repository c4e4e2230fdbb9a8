//! Thought record validator
//!
//! Checks a creation payload field by field and, when every field passes,
//! produces a normalized [`ValidThought`]. Every failing field is reported,
//! not just the first one.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::entities::Tag;

/// Minimum message length, after trimming
pub const MESSAGE_MIN_CHARS: usize = 5;
/// Maximum message length, after trimming
pub const MESSAGE_MAX_CHARS: usize = 140;
/// Maximum author name length, after trimming
pub const NAME_MAX_CHARS: usize = 50;

/// Length as clients count it: UTF-16 code units, so a character outside
/// the Basic Multilingual Plane (most emoji) counts twice.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Raw creation payload as supplied by a client
///
/// Every field is optional so that a missing field surfaces as a
/// `required` validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThoughtInput {
    pub message: Option<String>,
    pub tag: Option<String>,
    pub name: Option<String>,
}

/// A payload that passed validation, with message and name trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidThought {
    pub message: String,
    pub tag: Tag,
    pub name: String,
}

impl ThoughtInput {
    /// Build an input from plain strings
    pub fn new(
        message: impl Into<String>,
        tag: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            tag: Some(tag.into()),
            name: Some(name.into()),
        }
    }

    /// Validate and normalize the payload
    ///
    /// # Errors
    /// Returns every offending field keyed by name.
    pub fn into_valid(self) -> Result<ValidThought, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let message = check_message(self.message.as_deref())
            .map_err(|e| errors.add("message", e))
            .ok();
        let tag = check_tag(self.tag.as_deref())
            .map_err(|e| errors.add("tag", e))
            .ok();
        let name = check_name(self.name.as_deref())
            .map_err(|e| errors.add("name", e))
            .ok();

        match (message, tag, name) {
            (Some(message), Some(tag), Some(name)) => Ok(ValidThought { message, tag, name }),
            _ => Err(errors),
        }
    }
}

fn check_message(raw: Option<&str>) -> Result<String, ValidationError> {
    let message = required("message", raw)?;
    let len = text_len(message);

    if len < MESSAGE_MIN_CHARS {
        let mut err = field_error(
            "minlength",
            format!("message must be at least {MESSAGE_MIN_CHARS} characters, got {len}"),
        );
        err.add_param(Cow::Borrowed("min"), &MESSAGE_MIN_CHARS);
        err.add_param(Cow::Borrowed("value"), &message);
        return Err(err);
    }

    if len > MESSAGE_MAX_CHARS {
        let mut err = field_error(
            "maxlength",
            format!("message must be at most {MESSAGE_MAX_CHARS} characters, got {len}"),
        );
        err.add_param(Cow::Borrowed("max"), &MESSAGE_MAX_CHARS);
        err.add_param(Cow::Borrowed("value"), &message);
        return Err(err);
    }

    Ok(message.to_string())
}

fn check_name(raw: Option<&str>) -> Result<String, ValidationError> {
    let name = required("name", raw)?;
    let len = text_len(name);

    if len > NAME_MAX_CHARS {
        let mut err = field_error(
            "maxlength",
            format!("name must be at most {NAME_MAX_CHARS} characters, got {len}"),
        );
        err.add_param(Cow::Borrowed("max"), &NAME_MAX_CHARS);
        err.add_param(Cow::Borrowed("value"), &name);
        return Err(err);
    }

    Ok(name.to_string())
}

// Tags are matched exactly and are not trimmed.
fn check_tag(raw: Option<&str>) -> Result<Tag, ValidationError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(field_error("required", "tag is required".to_string())),
    };

    raw.parse::<Tag>().map_err(|unknown| {
        let mut err = field_error(
            "enum",
            format!("{unknown}; expected one of {}", Tag::allowed().join(", ")),
        );
        err.add_param(Cow::Borrowed("value"), &raw);
        err.add_param(Cow::Borrowed("allowed"), &Tag::allowed());
        err
    })
}

/// Trim and reject absent or blank values
fn required<'a>(field: &str, raw: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(field_error("required", format!("{field} is required"))),
    }
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}
