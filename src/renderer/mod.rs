//! WebGPU rendering module
//!
//! Thin consumer of the graphics backend: pixel-space vertex lists in,
//! cleared-and-presented frames out. Purely a function of the current game
//! state; no simulation logic lives here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{InitError, RenderState};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
