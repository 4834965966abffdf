//! Read-only view of a game for the presentation layer.

use crate::types::{GRID_SIZE, TARGET_TILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub won: bool,
    pub game_over: bool,
    pub target: u32,
    pub max_tile: u32,
    pub moves: u32,
    pub last_gained: u32,
    /// Cell that received the most recent spawned tile.
    pub last_spawn: Option<(usize, usize)>,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Whether moves are still accepted.
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Tile at `(row, col)`; 0 when empty or out of bounds.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            won: false,
            game_over: false,
            target: TARGET_TILE,
            max_tile: 0,
            moves: 0,
            last_gained: 0,
            last_spawn: None,
            episode_id: 0,
        }
    }
}
