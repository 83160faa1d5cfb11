//! Immutable per-run game configuration
//!
//! One `GameConfig` is built at startup and handed to the simulation; nothing
//! mutates it afterwards.

use crate::consts::WINDOW_WIDTH;

/// Per-run settings for the drop field and scoring quota
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of drop columns across the window
    pub columns: usize,
    /// Maximum concurrent drops per column
    pub slots_per_column: usize,
    /// Length of a drop's vertical segment (pixels)
    pub drop_length: i32,
    /// Minimum y every drop in a column must have reached before the column
    /// may spawn again
    pub drop_spacing: i32,
    /// Fall distance per tick (pixels)
    pub drop_distance: i32,
    /// Per-slot spawn probability, drawn once per eligible slot per tick
    pub raindrop_probability: f64,
    /// Probability a fresh spawn is tagged as the gold drop
    pub gold_drop_probability: f64,
    /// Gold drops per run; the game ends once this many have spawned and the
    /// last marker has resolved
    pub target_gold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            slots_per_column: 6,
            drop_length: 20,
            drop_spacing: 100,
            drop_distance: 3,
            raindrop_probability: 0.15,
            gold_drop_probability: 0.005,
            target_gold: 10,
        }
    }
}

impl GameConfig {
    /// Horizontal spacing between adjacent drop columns
    pub fn column_spacing(&self) -> i32 {
        WINDOW_WIDTH / self.columns as i32
    }

    /// X position of a column's drop line
    pub fn column_x(&self, column: usize) -> i32 {
        self.column_spacing() * column as i32
    }
}
