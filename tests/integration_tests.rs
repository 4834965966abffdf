//! Integration tests for the game lifecycle

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::core::{GameState, Grid, MoveOutcome, Phase, SimpleRng, SpawnedTile, TileRng, MAX_TILE};
use tui_2048::input::handle_key_event;
use tui_2048::share::SharePost;
use tui_2048::types::{Direction, GameAction, INITIAL_TILES, TARGET_TILE};

/// Picks the first empty cell and always spawns a 2.
#[derive(Default)]
struct FirstEmptyTwo {
    draws: u32,
}

impl TileRng for FirstEmptyTwo {
    fn next_range(&mut self, max: u32) -> u32 {
        self.draws += 1;
        if self.draws % 2 == 1 {
            0
        } else {
            max - 1
        }
    }
}

fn locked() -> Grid {
    Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.grid().tile_count(), INITIAL_TILES);
    for v in state.grid().cells().filter(|&v| v != 0) {
        assert!(v == 2 || v == 4);
    }
}

#[test]
fn test_spawn_only_on_change() {
    let start = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut state = GameState::from_grid(start, FirstEmptyTwo::default(), TARGET_TILE);

    // Up/left cannot change a top-left row.
    assert_eq!(state.apply_move(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(*state.grid(), start);

    let post_merge = start.slide(Direction::Left).grid;
    assert!(state.apply_move(Direction::Left).accepted());
    assert_eq!(state.grid().tile_count(), post_merge.tile_count() + 1);
    assert_eq!(
        *state.grid(),
        Grid::from_rows([[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]])
    );
    assert_eq!(state.moves(), 1);
}

#[test]
fn test_play_until_over_with_seeded_rng() {
    let mut state = GameState::with_rng(SimpleRng::new(2024), TARGET_TILE);
    let mut accepted = 0;
    // The opening board holds only spawned tiles.
    let mut spawned_total = state.grid().sum();

    // Cycling directions eventually locks the board.
    'outer: for _ in 0..20_000 {
        for dir in Direction::ALL {
            match state.apply_move(dir) {
                MoveOutcome::Moved { spawned, .. } => {
                    accepted += 1;
                    spawned_total += spawned.map_or(0, |t| t.value);
                }
                MoveOutcome::Blocked => {}
                MoveOutcome::Finished => break 'outer,
            }
            // Merges keep the board sum, so the score is everything ever spawned.
            assert_eq!(state.score(), state.grid().sum());
            assert_eq!(state.score(), spawned_total);
        }
    }

    assert!(state.game_over());
    assert!(!state.grid().can_move());
    assert_eq!(state.moves(), accepted);
    assert_eq!(state.grid().empty_count(), 0);

    // Terminal: nothing changes any more.
    let frozen = *state.grid();
    for dir in Direction::ALL {
        assert_eq!(state.apply_move(dir), MoveOutcome::Finished);
    }
    assert_eq!(*state.grid(), frozen);
    assert_eq!(state.score(), spawned_total);
}

#[test]
fn test_keys_drive_the_game() {
    let start = Grid::from_rows([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 2]]);
    let mut state = GameState::from_grid(start, FirstEmptyTwo::default(), TARGET_TILE);

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('d'))).unwrap();
    assert_eq!(action, GameAction::Move(Direction::Right));
    assert!(state.apply_action(action));
    assert_eq!(state.grid().get(3, 3), Some(4));

    let restart = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    assert!(state.apply_action(restart));
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.moves(), 0);
}

#[test]
fn test_share_after_game_over() {
    let mut state = GameState::from_grid(locked(), FirstEmptyTwo::default(), TARGET_TILE);
    assert!(state.game_over());
    assert!(state.apply_action(GameAction::Share));

    let post = SharePost::from_game(&state).unwrap();
    assert_eq!(post.score, 48);
    assert!(!post.won);
    assert_eq!(post.text, "I just finished 2048 with a score of 48!");

    let json: serde_json::Value = serde_json::from_str(&post.to_json_line().unwrap()).unwrap();
    assert_eq!(json["max_tile"], 4);

    // Restart leaves the Over phase and there is nothing to share.
    state.restart();
    assert!(SharePost::from_game(&state).is_none());
}

#[test]
fn test_winning_keeps_playing() {
    let start = Grid::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut state = GameState::from_grid(start, FirstEmptyTwo::default(), TARGET_TILE);
    assert!(state.apply_move(Direction::Left).accepted());
    assert!(state.won());
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.apply_move(Direction::Down).accepted());
}

#[test]
fn test_largest_tiles_resume_without_overflow() {
    let start = Grid::from_rows([
        [MAX_TILE, MAX_TILE, 1 << 30, 1 << 30],
        [0; 4],
        [0; 4],
        [0; 4],
    ]);
    let mut state = GameState::from_grid(start, FirstEmptyTwo::default(), TARGET_TILE);
    assert_eq!(state.score(), u32::MAX);

    // Only the 2^30 pair merges; the MAX_TILE pair stays put.
    assert_eq!(
        state.apply_move(Direction::Left),
        MoveOutcome::Moved {
            gained: MAX_TILE,
            spawned: Some(SpawnedTile {
                row: 0,
                col: 3,
                value: 2
            }),
        }
    );
    assert_eq!(state.grid().rows()[0], [MAX_TILE, MAX_TILE, MAX_TILE, 2]);
    assert_eq!(state.score(), u32::MAX);
    assert_eq!(state.merge_score(), MAX_TILE);
    assert!(state.won());
}
