//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the game core, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The classic 2048 board is a 4x4 grid. Everything in the workspace reads
//! [`GRID_SIZE`] instead of hard-coding 4.
//!
//! # Tile Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_VALUE` | 2 | Tile spawned most of the time |
//! | `SPAWN_HIGH_VALUE` | 4 | Tile spawned with 1-in-`SPAWN_HIGH_ODDS` chance |
//! | `SPAWN_HIGH_ODDS` | 10 | i.e. 2 with p=0.9, 4 with p=0.1 |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE, TARGET_TILE};
//!
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.as_str(), "up");
//!
//! let action = GameAction::from_str("left").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(TARGET_TILE, 2048);
//! ```

/// Side length of the square board.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that counts as a win.
pub const TARGET_TILE: u32 = 2048;

/// Number of tiles placed on an empty board when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawned tile.
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rarer spawned tile.
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// One spawn in `SPAWN_HIGH_ODDS` yields [`SPAWN_HIGH_VALUE`].
pub const SPAWN_HIGH_ODDS: u32 = 10;

/// Swipe direction.
///
/// Tiles slide toward the named edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from a string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Player inputs understood by the game controller.
///
/// Produced by the key map and consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward an edge
    Move(Direction),
    /// Throw the current board away and start a new episode
    Restart,
    /// Publish the final score (only honoured once the game is over)
    Share,
}

impl GameAction {
    /// Parse a game action from a string (case-insensitive)
    ///
    /// Direction names map to [`GameAction::Move`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("right"), Some(GameAction::Move(Direction::Right)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("share"), Some(GameAction::Share));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(GameAction::Move(dir));
        }
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            "share" => Some(GameAction::Share),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
            GameAction::Share => "share",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_odds_are_nine_to_one() {
        assert_eq!(SPAWN_LOW_VALUE, 2);
        assert_eq!(SPAWN_HIGH_VALUE, 4);
        assert_eq!(SPAWN_HIGH_ODDS, 10);
        assert_eq!(INITIAL_TILES, 2);
    }

    #[test]
    fn test_direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_game_action_parsing() {
        assert_eq!(
            GameAction::from_str("UP"),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str(""), None);
        assert_eq!(GameAction::Share.as_str(), "share");
        assert_eq!(GameAction::Move(Direction::Down).as_str(), "down");
    }
}
