//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed per-tick step
//! - Stable column-major scan order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::drop_paddle_collision;
pub use state::{DropGrid, GameState, Paddle, Rect, VisibleDrop};
pub use tick::tick;
