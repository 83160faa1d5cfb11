//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in window pixel coordinates; the
//! pipeline maps them to NDC at upload time.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Rect};

/// Width of drop lines and the paddle outline (pixels)
const LINE_WIDTH: f32 = 1.0;

/// Generate vertices for a line segment as a thin quad
pub fn line(from: Vec2, to: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (LINE_WIDTH / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Vertical drop line at column x spanning `[y, y + length]`
pub fn drop_line(x: i32, y: i32, length: i32, color: [f32; 4]) -> Vec<Vertex> {
    line(
        Vec2::new(x as f32, y as f32),
        Vec2::new(x as f32, (y + length) as f32),
        color,
    )
}

/// Rectangle outline as four thin edge quads
pub fn rect_outline(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let left = rect.x as f32;
    let top = rect.y as f32;
    let right = (rect.x + rect.w) as f32;
    let bottom = (rect.y + rect.h) as f32;

    let mut vertices = Vec::with_capacity(24);
    vertices.extend(line(Vec2::new(left, top), Vec2::new(right, top), color));
    vertices.extend(line(
        Vec2::new(right, top),
        Vec2::new(right, bottom),
        color,
    ));
    vertices.extend(line(
        Vec2::new(right, bottom),
        Vec2::new(left, bottom),
        color,
    ));
    vertices.extend(line(Vec2::new(left, bottom), Vec2::new(left, top), color));
    vertices
}

/// Build the complete vertex list for one frame: paddle outline plus every
/// drop visible this tick (gold drop in its own color)
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = rect_outline(&state.paddle.rect, colors::PADDLE);

    for drop in &state.visible {
        let color = if drop.gold {
            colors::GOLD_DROP
        } else {
            colors::DROP
        };
        vertices.extend(drop_line(drop.x, drop.y, state.config.drop_length, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::sim::VisibleDrop;

    #[test]
    fn test_line_emits_one_quad() {
        let vertices = line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 20.0), colors::DROP);
        assert_eq!(vertices.len(), 6);
        for vertex in &vertices {
            assert_eq!(vertex.color, colors::DROP);
        }
    }

    #[test]
    fn test_rect_outline_has_four_edges() {
        let vertices = rect_outline(&Rect::new(10, 10, 100, 20), colors::PADDLE);
        assert_eq!(vertices.len(), 24);
    }

    #[test]
    fn test_frame_colors_gold_drop_distinctly() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.visible.push(VisibleDrop {
            x: 100,
            y: 50,
            gold: false,
        });
        state.visible.push(VisibleDrop {
            x: 200,
            y: 80,
            gold: true,
        });

        let vertices = frame_vertices(&state);
        // Paddle outline + two drop quads
        assert_eq!(vertices.len(), 24 + 12);
        assert!(vertices.iter().any(|v| v.color == colors::GOLD_DROP));
        assert!(vertices.iter().any(|v| v.color == colors::DROP));
    }
}
