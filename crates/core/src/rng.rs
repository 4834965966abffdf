//! RNG module - random tile spawning
//!
//! Spawning takes its randomness from a [`TileRng`] passed in by the caller,
//! so games are reproducible from a seed and tests can script exact outcomes.
//! [`SimpleRng`] is the default source.

use crate::grid::Grid;
use crate::types::{SPAWN_HIGH_ODDS, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// Source of randomness for tile spawning.
pub trait TileRng {
    /// Uniform value in `[0, max)`. `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // c is odd, so every seed (0 included) walks the full 2^32 period.
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl TileRng for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A tile placed by [`spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place one random tile into a uniformly chosen empty cell.
///
/// Returns the new grid and where the tile went. A full board is returned
/// unchanged with `None`, and no randomness is consumed.
pub fn spawn_tile<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> (Grid, Option<SpawnedTile>) {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (*grid, None);
    }

    let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = if rng.next_range(SPAWN_HIGH_ODDS) == 0 {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    };

    (
        grid.with_tile(row, col, value),
        Some(SpawnedTile { row, col, value }),
    )
}

/// Place one random tile, discarding its position.
pub fn spawn<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    spawn_tile(grid, rng).0
}
