//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules and the game controller. It has no
//! dependencies on UI, terminal or I/O, which makes it:
//!
//! - **Deterministic**: the only randomness comes from an injected [`TileRng`];
//!   the same seed replays the same game
//! - **Testable**: the move engine is a pure function of grid and direction
//! - **Allocation-free on the hot path**: grids are `Copy` arrays and empty-cell
//!   scans use `ArrayVec`
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 board, the slide/merge move engine and status derivation
//! - [`rng`]: tile spawner and the default LCG source
//! - [`game_state`]: controller that applies one input at a time
//! - [`snapshot`]: copyable view handed to the renderer
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once
//! - A move that changes nothing is ignored and spawns nothing
//! - Every accepted move spawns a 2 (90%) or a 4 (10%) in a random empty cell
//! - Score is the sum of all tiles on the board
//! - Reaching the target tile sets `won` but play continues
//! - The game is over when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, MoveOutcome};
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     match game.apply_move(dir) {
//!         MoveOutcome::Moved { .. } => assert!(game.moves() > 0),
//!         MoveOutcome::Blocked | MoveOutcome::Finished => {}
//!     }
//! }
//! assert_eq!(game.score(), game.grid().sum());
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod share;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveOutcome, Phase};
pub use grid::{slide_and_merge, GameStatus, Grid, MoveResult, Row, MAX_TILE};
pub use rng::{spawn, spawn_tile, SimpleRng, SpawnedTile, TileRng};
pub use share::share_message;
pub use snapshot::GameSnapshot;
