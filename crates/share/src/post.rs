//! Share payload.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, GameSnapshot, TileRng};

/// Everything a sink may publish about a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePost {
    /// Human-readable message, e.g. for a social post.
    pub text: String,
    pub score: u32,
    pub won: bool,
    pub max_tile: u32,
    pub moves: u32,
    pub episode_id: u32,
}

impl SharePost {
    /// Build a post for a finished game; `None` while the game is running.
    pub fn from_game<R: TileRng>(game: &GameState<R>) -> Option<Self> {
        let text = game.share_message()?;
        Some(Self::with_text(text, &game.snapshot()))
    }

    fn with_text(text: String, snap: &GameSnapshot) -> Self {
        Self {
            text,
            score: snap.score,
            won: snap.won,
            max_tile: snap.max_tile,
            moves: snap.moves,
            episode_id: snap.episode_id,
        }
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
