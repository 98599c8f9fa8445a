//! Player records as the roster API serves them.
//!
//! ## Field shape
//!
//! The API speaks camelCase JSON (`imageUrl`, `createdAt`). Fields the
//! server may omit or null out are optional here, so a sparse record
//! still parses.

use serde::{Deserialize, Serialize};

/// Server-assigned player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a player currently is: warming the bench or out on the field.
///
/// The API spells these lowercase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Bench,
    Field,
}

impl PlayerStatus {
    /// The other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Bench => Self::Field,
            Self::Field => Self::Bench,
        }
    }

    /// Lowercase label, exactly as the API spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bench => "bench",
            Self::Field => "field",
        }
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A roster entry as returned by the API.
///
/// `team` stays raw JSON: the server returns a whole team object or null,
/// and the client only ever displays it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub cohort_id: Option<u64>,
    #[serde(default)]
    pub team: Option<serde_json::Value>,
}

impl Player {
    /// Build a minimal record; the optional fields start empty.
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        breed: impl Into<String>,
        status: PlayerStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            breed: breed.into(),
            status,
            image_url: None,
            created_at: None,
            updated_at: None,
            team_id: None,
            cohort_id: None,
            team: None,
        }
    }

    /// Attach an image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Payload for creating a player.
///
/// Serializes to the camelCase body the collection endpoint expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
}
