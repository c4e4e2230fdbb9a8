//! Tag - the fixed category attached to every thought

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thought category
///
/// The wire form is the display string, so `WorkSchool` travels as `"Work/School"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Family,
    Pets,
    #[serde(rename = "Work/School")]
    WorkSchool,
    Love,
    Food,
    Exercise,
}

impl Tag {
    /// Every accepted tag, in the order clients are shown them
    pub const ALL: [Tag; 6] = [
        Tag::Family,
        Tag::Pets,
        Tag::WorkSchool,
        Tag::Love,
        Tag::Food,
        Tag::Exercise,
    ];

    /// Get the wire/database representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Pets => "Pets",
            Self::WorkSchool => "Work/School",
            Self::Love => "Love",
            Self::Food => "Food",
            Self::Exercise => "Exercise",
        }
    }

    /// All accepted tag strings
    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the accepted tags
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid tag")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Matching is exact: `"food"` is not `Food`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
