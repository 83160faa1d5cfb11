//! Backend-independent input handling
//!
//! The platform layer converts OS events into [`InputEvent`]s and tracks held
//! keys in [`KeyState`]; [`InputHandler`] consumes both once per tick and is
//! the only mutator of the paddle. Keeping the types free of windowing
//! dependencies lets the whole layer run headless in tests.

use crate::consts::{PADDLE_SPEED, WINDOW_WIDTH};
use crate::sim::Paddle;

/// A pointer or window event delivered to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    PointerDown { x: i32, y: i32 },
    PointerUp,
    PointerMoved { x: i32, y: i32 },
}

/// Continuous held-key state, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
}

/// Paddle steering state: drag tracking across ticks
#[derive(Debug, Default)]
pub struct InputHandler {
    dragging: bool,
    offset_x: i32,
    offset_y: i32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this tick's pending events and key state, mutating the paddle.
    /// Returns `false` once a quit has been requested.
    pub fn process(&mut self, events: &[InputEvent], keys: KeyState, paddle: &mut Paddle) -> bool {
        let mut running = true;

        for event in events {
            match *event {
                InputEvent::Quit => running = false,
                InputEvent::PointerDown { x, y } => {
                    if paddle.rect.contains(x, y) {
                        self.dragging = true;
                        self.offset_x = x - paddle.rect.x;
                        self.offset_y = y - paddle.rect.y;
                    }
                }
                InputEvent::PointerUp => self.dragging = false,
                InputEvent::PointerMoved { x, y } => {
                    // Drag tracks the pointer exactly; no bounds clamping, so
                    // the paddle can be parked partially off-screen.
                    if self.dragging {
                        paddle.rect.x = x - self.offset_x;
                        paddle.rect.y = y - self.offset_y;
                    }
                }
            }
        }

        if keys.left || keys.right {
            let mut x = paddle.rect.x;
            if keys.left {
                x -= PADDLE_SPEED;
            }
            if keys.right {
                x += PADDLE_SPEED;
            }
            paddle.rect.x = x.clamp(0, WINDOW_WIDTH - paddle.rect.w);
        }

        running
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }
}
