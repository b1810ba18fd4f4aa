//! Player identity.
//!
//! A `PlayerName` is always trimmed and never empty. Deserialization goes
//! through the same validation as [`PlayerName::new`].

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Validated player name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a player name, trimming surrounding whitespace.
    ///
    /// ```
    /// use rust_dicegame::core::PlayerName;
    ///
    /// let name = PlayerName::new("  Alice ").unwrap();
    /// assert_eq!(name.as_str(), "Alice");
    /// assert!(PlayerName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> GameResult<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = GameError;

    fn try_from(value: String) -> GameResult<Self> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
