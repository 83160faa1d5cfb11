//! Raindrop - a falling-raindrop catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drop grid, collisions, score)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Window creation and input event plumbing (winit)
//! - `input`: Backend-independent input handling
//! - `config`: Immutable per-run configuration

pub mod config;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;

/// Window, pacing, and paddle constants
pub mod consts {
    /// Window dimensions in logical pixels
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;

    /// End-of-frame delay pacing the loop (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 3;

    /// Paddle geometry
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    /// Horizontal paddle speed under key movement (pixels per tick)
    pub const PADDLE_SPEED: i32 = 3;

    /// Grid value marking "no active drop in this slot"
    pub const DROP_SENTINEL: i32 = WINDOW_HEIGHT + 1;
}
