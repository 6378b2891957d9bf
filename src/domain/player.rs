use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PLACEHOLDER_PHOTO: &str = "assets/face_placeholder.png";

/// basketball-reference player identifier, e.g. `mcgeeja01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StatsError::InvalidPlayerId(id));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First letter of the id; player pages are bucketed by it.
    pub fn initial(&self) -> char {
        // Non-empty by construction.
        self.0.chars().next().unwrap_or('a')
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlayerId {
    type Error = StatsError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttribute {
    pub name: String,
    pub value: String,
}

/// Profile header of a player page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub photo_url: String,
    pub name: String,
    pub attributes: Vec<PlayerAttribute>,
    /// `attributes` rendered as a bulleted markdown block.
    pub metadata: String,
}

impl PlayerInfo {
    pub fn new(photo_url: String, name: String, attributes: Vec<PlayerAttribute>) -> Self {
        let metadata = render_metadata(&attributes);
        Self {
            photo_url,
            name,
            attributes,
            metadata,
        }
    }

    /// Info used when the profile header cannot be read at all.
    pub fn unknown(placeholder: &str) -> Self {
        Self::new(placeholder.to_string(), String::new(), Vec::new())
    }
}

fn render_metadata(attributes: &[PlayerAttribute]) -> String {
    attributes
        .iter()
        .map(|attr| format!("* {}: {}\n", attr.name, attr.value))
        .collect()
}
