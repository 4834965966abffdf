//! Grid module - the 2048 board and the move engine
//!
//! The board is a `GRID_SIZE` x `GRID_SIZE` matrix of tile values where 0 is an
//! empty cell and every other value is a power of two >= 2.
//! Coordinates: `(row, col)`, row 0 at the top, col 0 on the left.
//!
//! [`Grid`] is `Copy`: every transformation returns a new grid and never
//! touches the receiver. A move is computed by reorienting the board so the
//! requested direction becomes "slide left", running [`slide_and_merge`] on each
//! row, then undoing the reorientation.

use arrayvec::ArrayVec;

use crate::types::{Direction, CELL_COUNT, GRID_SIZE};

/// One board row, left to right.
pub type Row = [u32; GRID_SIZE];

/// Largest tile a `u32` cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Value produced by merging two `value` tiles, if it fits in a cell.
fn merged_value(value: u32) -> Option<u32> {
    value.checked_mul(2)
}

/// The game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: [Row; GRID_SIZE],
}

/// Result of sliding a grid in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    /// Sum of every tile produced by a merge during this move.
    pub gained: u32,
    /// True iff `grid` differs from the input in any cell.
    pub changed: bool,
}

/// Reorientation that turns a direction into "slide left".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Identity,
    Mirrored,
    Transposed,
    TransposedMirrored,
}

impl Orientation {
    fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Orientation::Identity,
            Direction::Right => Orientation::Mirrored,
            Direction::Up => Orientation::Transposed,
            Direction::Down => Orientation::TransposedMirrored,
        }
    }

    fn apply(self, grid: &Grid) -> Grid {
        match self {
            Orientation::Identity => *grid,
            Orientation::Mirrored => grid.reverse_rows(),
            Orientation::Transposed => grid.transpose(),
            Orientation::TransposedMirrored => grid.transpose().reverse_rows(),
        }
    }

    fn invert(self, grid: &Grid) -> Grid {
        match self {
            Orientation::Identity => *grid,
            Orientation::Mirrored => grid.reverse_rows(),
            Orientation::Transposed => grid.transpose(),
            Orientation::TransposedMirrored => grid.reverse_rows().transpose(),
        }
    }
}

/// Compact a row toward index 0 and merge equal neighbours.
///
/// Single greedy left-to-right pass: a tile merges at most once, and a freshly
/// merged tile is never merged again in the same pass. Returns the new row and
/// the sum of the merged tiles (saturating at `u32::MAX`). A pair of
/// [`MAX_TILE`]s stays as two tiles.
///
/// ```
/// use tui_2048_core::grid::slide_and_merge;
///
/// assert_eq!(slide_and_merge([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(slide_and_merge([0, 2, 0, 2]), ([4, 0, 0, 0], 4));
/// assert_eq!(slide_and_merge([2, 0, 2, 4]), ([4, 4, 0, 0], 4));
/// ```
pub fn slide_and_merge(row: Row) -> (Row, u32) {
    let tiles: ArrayVec<u32, GRID_SIZE> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0u32; GRID_SIZE];
    let mut len = 0;
    let mut gained = 0u32;
    let mut i = 0;
    while i < tiles.len() {
        let value = tiles[i];
        match merged_value(value).filter(|_| tiles.get(i + 1) == Some(&value)) {
            Some(merged) => {
                out[len] = merged;
                gained = gained.saturating_add(merged);
                i += 2;
            }
            None => {
                out[len] = value;
                i += 1;
            }
        }
        len += 1;
    }

    (out, gained)
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows, top to bottom
    pub fn from_rows(rows: [Row; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Rows, top to bottom
    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.rows
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Get the tile at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Copy of this grid with `(row, col)` set to `value`.
    ///
    /// Out-of-bounds coordinates leave the copy unchanged.
    pub fn with_tile(&self, row: usize, col: usize, value: u32) -> Self {
        let mut next = *self;
        if let Some(cell) = next.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
        next
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.rows[c][r] = value;
            }
        }
        out
    }

    /// Reverse every row (mirror left/right).
    pub fn reverse_rows(&self) -> Self {
        let mut out = *self;
        for row in out.rows.iter_mut() {
            row.reverse();
        }
        out
    }

    /// Slide every tile toward `direction`.
    ///
    /// Pure: the same grid and direction always produce the same result.
    pub fn slide(&self, direction: Direction) -> MoveResult {
        let orientation = Orientation::for_direction(direction);
        let mut work = orientation.apply(self);

        let mut gained = 0u32;
        for row in work.rows.iter_mut() {
            let (next, row_gain) = slide_and_merge(*row);
            *row = next;
            gained = gained.saturating_add(row_gain);
        }

        let grid = orientation.invert(&work);
        MoveResult {
            grid,
            gained,
            changed: grid != *self,
        }
    }

    /// Sum of all tile values, saturating at `u32::MAX`.
    pub fn sum(&self) -> u32 {
        self.cells().fold(0, u32::saturating_add)
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells().max().unwrap_or(0)
    }

    /// Whether any tile is at least `value`.
    pub fn has_tile_at_least(&self, value: u32) -> bool {
        self.cells().any(|v| v >= value)
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&v| v == 0).count()
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Whether some move could still change the board.
    ///
    /// True if any cell is empty, or any cell can merge with its right or lower
    /// neighbour. Checking right/below covers left/above by symmetry.
    pub fn can_move(&self) -> bool {
        if self.empty_count() > 0 {
            return true;
        }
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let value = self.rows[r][c];
                if merged_value(value).is_none() {
                    continue;
                }
                if c + 1 < GRID_SIZE && self.rows[r][c + 1] == value {
                    return true;
                }
                if r + 1 < GRID_SIZE && self.rows[r + 1][c] == value {
                    return true;
                }
            }
        }
        false
    }
}

impl From<[Row; GRID_SIZE]> for Grid {
    fn from(rows: [Row; GRID_SIZE]) -> Self {
        Self::from_rows(rows)
    }
}

/// Score and flags derived from a grid.
///
/// Never stored on its own: recompute with [`GameStatus::of`] whenever the grid
/// is replaced. `won` and `over` are independent; both may be true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameStatus {
    /// Sum of all tiles.
    pub score: u32,
    /// Some tile reached the target.
    pub won: bool,
    /// No move in any direction can change the board.
    pub over: bool,
}

impl GameStatus {
    pub fn of(grid: &Grid, target: u32) -> Self {
        Self {
            score: grid.sum(),
            won: grid.has_tile_at_least(target),
            over: !grid.can_move(),
        }
    }
}
