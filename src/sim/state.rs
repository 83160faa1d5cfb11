//! Game state and core simulation types
//!
//! Everything the tick function reads or writes lives here; the renderer and
//! platform layers only ever borrow it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::consts::*;

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether a point lies within the rectangle (edges inclusive)
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

/// The player-controlled interceptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                WINDOW_WIDTH / 2 - PADDLE_WIDTH / 2,
                WINDOW_HEIGHT * 4 / 5,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }
}

/// Dense 2D grid of drop y-positions, indexed (column, slot)
///
/// `DROP_SENTINEL` marks an inactive slot. Values below zero are drops whose
/// head has not yet entered the visible area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropGrid {
    columns: usize,
    slots_per_column: usize,
    cells: Vec<i32>,
}

impl DropGrid {
    /// Create a grid with every slot inactive
    pub fn new(columns: usize, slots_per_column: usize) -> Self {
        Self {
            columns,
            slots_per_column,
            cells: vec![DROP_SENTINEL; columns * slots_per_column],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn slots_per_column(&self) -> usize {
        self.slots_per_column
    }

    #[inline]
    fn index(&self, column: usize, slot: usize) -> usize {
        debug_assert!(column < self.columns && slot < self.slots_per_column);
        column * self.slots_per_column + slot
    }

    pub fn get(&self, column: usize, slot: usize) -> i32 {
        self.cells[self.index(column, slot)]
    }

    pub fn set(&mut self, column: usize, slot: usize, y: i32) {
        let index = self.index(column, slot);
        self.cells[index] = y;
    }

    /// Number of slots in a column holding a drop on or above the window
    pub fn active_in_column(&self, column: usize) -> usize {
        (0..self.slots_per_column)
            .filter(|&slot| self.get(column, slot) < WINDOW_HEIGHT)
            .count()
    }
}

/// A drop recorded for rendering this tick, at its drawn (pre-advance)
/// position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleDrop {
    /// Column x position
    pub x: i32,
    /// Head of the vertical segment; the tail is at `y + drop_length`
    pub y: i32,
    pub gold: bool,
}

/// Complete state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Per-run settings, fixed at construction
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub grid: DropGrid,
    /// The one cell currently marked gold, if any
    pub gold: Option<(usize, usize)>,
    pub paddle: Paddle,
    /// Successful gold interceptions
    pub score: u32,
    /// Gold drops tagged so far this run
    pub gold_spawned: u32,
    /// Latched once the gold quota is met and the marker has resolved; the
    /// loop exits after rendering the tick that set it
    pub game_over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Drops visible this tick, rebuilt by `tick`
    pub visible: Vec<VisibleDrop>,
}

impl GameState {
    /// Create a fresh run with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let grid = DropGrid::new(config.columns, config.slots_per_column);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid,
            gold: None,
            paddle: Paddle::default(),
            score: 0,
            gold_spawned: 0,
            game_over: false,
            time_ticks: 0,
            visible: Vec::new(),
        }
    }
}
