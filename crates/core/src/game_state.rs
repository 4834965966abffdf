//! Game state module - drives the move engine one input at a time
//!
//! [`GameState`] owns the current grid, its derived [`GameStatus`] and the
//! tile RNG. Every accepted move replaces the grid wholesale; blocked moves and
//! moves after game over leave everything untouched, counters included.

use crate::grid::{GameStatus, Grid};
use crate::rng::{spawn_tile, SimpleRng, SpawnedTile, TileRng};
use crate::share::share_message;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, INITIAL_TILES, TARGET_TILE};

/// Controller phase. `Over` is terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Over,
}

/// What happened to a directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Board changed and a new tile was spawned.
    Moved {
        gained: u32,
        spawned: Option<SpawnedTile>,
    },
    /// Nothing could slide or merge that way.
    Blocked,
    /// Game is over; input ignored.
    Finished,
}

impl MoveOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = SimpleRng> {
    grid: Grid,
    status: GameStatus,
    phase: Phase,
    rng: R,
    target: u32,
    /// Accepted moves in this episode.
    moves: u32,
    /// Running total of merge gains in this episode.
    merge_score: u32,
    last_gained: u32,
    last_spawn: Option<SpawnedTile>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed and the standard target
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), TARGET_TILE)
    }
}

impl<R: TileRng> GameState<R> {
    /// Create a new game drawing tiles from `rng`.
    ///
    /// The board starts with [`INITIAL_TILES`] spawned tiles.
    pub fn with_rng(rng: R, target: u32) -> Self {
        let mut state = Self::from_grid(Grid::new(), rng, target);
        state.seed_board();
        state
    }

    /// Resume from an existing board without spawning anything.
    ///
    /// Status and phase are derived from `grid`, so a locked board starts Over.
    pub fn from_grid(grid: Grid, rng: R, target: u32) -> Self {
        let mut state = Self {
            grid,
            status: GameStatus::default(),
            phase: Phase::Playing,
            rng,
            target,
            moves: 0,
            merge_score: 0,
            last_gained: 0,
            last_spawn: None,
            episode_id: 0,
        };
        state.adopt(grid);
        state
    }

    fn seed_board(&mut self) {
        let mut grid = Grid::new();
        for _ in 0..INITIAL_TILES {
            let (next, spawned) = spawn_tile(&grid, &mut self.rng);
            grid = next;
            self.last_spawn = spawned;
        }
        self.adopt(grid);
    }

    /// Replace the grid and re-derive everything that depends on it.
    fn adopt(&mut self, grid: Grid) {
        self.grid = grid;
        self.status = GameStatus::of(&self.grid, self.target);
        self.phase = if self.status.over {
            Phase::Over
        } else {
            Phase::Playing
        };
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.status.score
    }

    pub fn won(&self) -> bool {
        self.status.won
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn merge_score(&self) -> u32 {
        self.merge_score
    }

    pub fn last_gained(&self) -> u32 {
        self.last_gained
    }

    pub fn last_spawn(&self) -> Option<SpawnedTile> {
        self.last_spawn
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Slide the board toward `direction`.
    ///
    /// Only a move that changes the board spawns a tile and advances counters.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase == Phase::Over {
            return MoveOutcome::Finished;
        }

        let result = self.grid.slide(direction);
        if !result.changed {
            return MoveOutcome::Blocked;
        }

        let (grid, spawned) = spawn_tile(&result.grid, &mut self.rng);
        self.moves += 1;
        self.merge_score = self.merge_score.saturating_add(result.gained);
        self.last_gained = result.gained;
        self.last_spawn = spawned;
        self.adopt(grid);

        MoveOutcome::Moved {
            gained: result.gained,
            spawned,
        }
    }

    /// Apply a game action
    ///
    /// Returns true if the action had an effect (for `Share`: a share message
    /// is available).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).accepted(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Share => self.share_message().is_some(),
        }
    }

    /// Start a new episode, continuing the same RNG stream.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        self.merge_score = 0;
        self.last_gained = 0;
        self.seed_board();
    }

    /// Text handed to the share action; only available once the game is over.
    pub fn share_message(&self) -> Option<String> {
        match self.phase {
            Phase::Over => Some(share_message(self.status.score)),
            Phase::Playing => None,
        }
    }

    /// Whether sliding toward `direction` would change the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.phase == Phase::Playing && self.grid.slide(direction).changed
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.score = self.status.score;
        out.won = self.status.won;
        out.game_over = self.phase == Phase::Over;
        out.target = self.target;
        out.max_tile = self.grid.max_tile();
        out.moves = self.moves;
        out.last_gained = self.last_gained;
        out.last_spawn = self.last_spawn.map(|t| (t.row, t.col));
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Replace the board directly (test setup).
    #[cfg(test)]
    pub(crate) fn set_grid(&mut self, grid: Grid) {
        self.adopt(grid);
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the first empty cell and a 2.
    ///
    /// Each spawn draws twice: position, then value.
    #[derive(Default)]
    struct FirstCell {
        draws: u32,
    }

    impl TileRng for FirstCell {
        fn next_range(&mut self, max: u32) -> u32 {
            self.draws += 1;
            if self.draws % 2 == 0 {
                max - 1
            } else {
                0
            }
        }
    }

    fn locked() -> Grid {
        Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.grid().tile_count(), INITIAL_TILES);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.target(), TARGET_TILE);
        assert_eq!(state.score(), state.grid().sum());
        assert!(!state.won());
        assert!(!state.game_over());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::new(42);
        let mut b = GameState::new(42);
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(dir), b.apply_move(dir));
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn test_scripted_initial_board() {
        let state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        assert_eq!(
            *state.grid(),
            Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]])
        );
    }

    #[test]
    fn test_move_spawns_exactly_one_tile() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        let merged = state.grid().slide(Direction::Right).grid;
        assert_eq!(merged, Grid::from_rows([[0, 0, 0, 4], [0; 4], [0; 4], [0; 4]]));

        let outcome = state.apply_move(Direction::Right);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                gained: 4,
                spawned: Some(SpawnedTile {
                    row: 0,
                    col: 0,
                    value: 2
                }),
            }
        );
        assert_eq!(state.grid().tile_count(), merged.tile_count() + 1);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.merge_score(), 4);
        assert_eq!(state.last_gained(), 4);
        assert_eq!(state.score(), 6);
    }

    #[test]
    fn test_blocked_move_changes_nothing() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        // [2,2,0,0] in the top row; sliding up cannot change anything.
        let before = *state.grid();
        assert!(!state.can_slide(Direction::Up));
        assert_eq!(state.apply_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(*state.grid(), before);
        assert_eq!(state.moves(), 0);
        assert!(!state.apply_action(GameAction::Move(Direction::Up)));
    }

    #[test]
    fn test_locked_board_is_over_and_ignores_input() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.set_grid(locked());
        assert_eq!(state.phase(), Phase::Over);

        for dir in Direction::ALL {
            assert_eq!(state.apply_move(dir), MoveOutcome::Finished);
        }
        assert_eq!(*state.grid(), locked());
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_vertical_pair_keeps_game_alive() {
        // Sliding left merges the two 2s and the spawned 2 fills the hole at the
        // end of the top row. The board is full, but 4 sits above 4.
        let start = Grid::from_rows([[2, 2, 8, 16], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.set_grid(start);

        assert!(state.apply_move(Direction::Left).accepted());
        assert_eq!(
            *state.grid(),
            Grid::from_rows([[4, 8, 16, 2], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        );
        assert_eq!(state.grid().empty_count(), 0);
        assert_eq!(state.phase(), Phase::Playing);

        // First column 4+4 and last column 2+2 both merge.
        assert!(state.apply_move(Direction::Up).accepted());
        assert_eq!(state.merge_score(), 4 + 8 + 4);
    }

    #[test]
    fn test_move_into_game_over() {
        let start = Grid::from_rows([[4, 4, 16, 8], [2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4]]);
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.set_grid(start);
        assert_eq!(state.phase(), Phase::Playing);

        assert!(state.apply_move(Direction::Left).accepted());
        assert_eq!(
            *state.grid(),
            Grid::from_rows([[8, 16, 8, 2], [2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4]])
        );
        assert_eq!(state.phase(), Phase::Over);
        assert!(state.game_over());
        assert_eq!(state.apply_move(Direction::Right), MoveOutcome::Finished);
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_win_does_not_end_game() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.set_grid(Grid::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert!(!state.won());

        let outcome = state.apply_move(Direction::Left);
        assert!(outcome.accepted());
        assert!(state.won());
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.apply_move(Direction::Right).accepted());
        assert!(state.won());
    }

    #[test]
    fn test_won_and_over_together() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.set_grid(locked().with_tile(0, 0, 2048));
        assert!(state.won());
        assert!(state.game_over());
    }

    #[test]
    fn test_custom_target() {
        let mut state = GameState::with_rng(FirstCell::default(), 8);
        state.set_grid(Grid::from_rows([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]));
        state.apply_move(Direction::Left);
        assert!(state.won());
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = GameState::new(7);
        let _ = state.apply_move(Direction::Left);
        let _ = state.apply_move(Direction::Up);
        assert!(state.apply_action(GameAction::Restart));

        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.merge_score(), 0);
        assert_eq!(state.grid().tile_count(), INITIAL_TILES);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_restart_leaves_over_phase() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.set_grid(locked());
        state.restart();
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_share_only_when_over() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        assert_eq!(state.share_message(), None);
        assert!(!state.apply_action(GameAction::Share));

        state.set_grid(locked());
        let text = state.share_message().unwrap();
        assert!(text.contains("48"), "{}", text);
        assert!(state.apply_action(GameAction::Share));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::with_rng(FirstCell::default(), TARGET_TILE);
        state.apply_move(Direction::Right);
        let snap = state.snapshot();

        assert_eq!(snap.grid, *state.grid().rows());
        assert_eq!(snap.score, 6);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.max_tile, 4);
        assert_eq!(snap.last_gained, 4);
        assert_eq!(snap.last_spawn, Some((0, 0)));
        assert!(!snap.game_over);
        assert!(snap.playable());
    }
}
