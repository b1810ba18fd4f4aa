//! Lifecycle event values.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerName, Roll, Score};

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player started a game.
    Started {
        /// Who started.
        player: PlayerName,
    },

    /// A roll was made and scored.
    RollMade {
        /// Who rolled.
        player: PlayerName,
        /// The roll.
        roll: Roll,
        /// Score after the roll.
        score: Score,
    },

    /// The game ended.
    Finished {
        /// Who played.
        player: PlayerName,
        /// Score at the end.
        final_score: Score,
    },
}

impl GameEvent {
    /// Create a start event.
    pub fn started(player: PlayerName) -> Self {
        GameEvent::Started { player }
    }

    /// Create a roll event.
    pub fn roll_made(player: PlayerName, roll: Roll, score: Score) -> Self {
        GameEvent::RollMade { player, roll, score }
    }

    /// Create a finish event.
    pub fn finished(player: PlayerName, final_score: Score) -> Self {
        GameEvent::Finished { player, final_score }
    }

    /// The player the event concerns.
    #[must_use]
    pub fn player(&self) -> &PlayerName {
        match self {
            GameEvent::Started { player }
            | GameEvent::RollMade { player, .. }
            | GameEvent::Finished { player, .. } => player,
        }
    }

    /// Score carried by the event, if any.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self {
            GameEvent::Started { .. } => None,
            GameEvent::RollMade { score, .. } => Some(*score),
            GameEvent::Finished { final_score, .. } => Some(*final_score),
        }
    }
}
