//! Food module - pellet position and random placement
//!
//! Placement is uniform over the board interior (row and column 0 are never
//! chosen) and does not look at the snake, so food can land under the body.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Point, CELL_SIZE};

/// The single food pellet on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodState {
    pub position: Point,
    /// `false` once eaten, until a replacement is placed.
    pub spawned: bool,
}

impl FoodState {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            spawned: true,
        }
    }
}

/// Random source for food placement
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
    cols: i32,
    rows: i32,
}

impl FoodSpawner {
    /// Spawner seeded from the OS entropy source.
    pub fn from_entropy(width: i32, height: i32) -> Self {
        Self::from_rng(StdRng::from_entropy(), width, height)
    }

    /// Deterministic spawner for tests and benchmarks.
    pub fn seeded(seed: u64, width: i32, height: i32) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), width, height)
    }

    fn from_rng(rng: StdRng, width: i32, height: i32) -> Self {
        Self {
            rng,
            cols: (width / CELL_SIZE).max(2),
            rows: (height / CELL_SIZE).max(2),
        }
    }

    /// Pick a grid-aligned position in `[1, cols) x [1, rows)` cells.
    pub fn next_position(&mut self) -> Point {
        let cx = self.rng.gen_range(1..self.cols);
        let cy = self.rng.gen_range(1..self.rows);
        Point::new(cx * CELL_SIZE, cy * CELL_SIZE)
    }

    /// Fresh, spawned food.
    pub fn spawn(&mut self) -> FoodState {
        FoodState::at(self.next_position())
    }
}
