//! Tessellation of draw commands into triangle-list vertices
//!
//! Backends that want a single vertex buffer instead of per-command
//! painting run the command list through `tessellate`. Text is left to the
//! host's own text layer and produces no geometry here.

use std::f32::consts::TAU;

use super::draw::DrawCommand;
use super::vertex::Vertex;

/// Segments per disc; plenty for coin-sized circles
const DISC_SEGMENTS: u32 = 24;

/// Convert a command list into a triangle list. `Clear` and `Text` emit no
/// geometry.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(commands.len() * 6);
    for command in commands {
        match command {
            DrawCommand::Clear { .. } | DrawCommand::Text { .. } => {}
            DrawCommand::Rect { x, y, w, h, color } => {
                push_quad(&mut vertices, *x, *y, *w, *h, *color);
            }
            DrawCommand::Disc {
                cx,
                cy,
                radius,
                color,
            } => {
                push_disc(&mut vertices, *cx, *cy, *radius, *color);
            }
            DrawCommand::Triangle { points, color } => {
                for [px, py] in points {
                    vertices.push(Vertex::new(*px, *py, *color));
                }
            }
        }
    }
    vertices
}

/// Two triangles covering an axis-aligned rectangle
fn push_quad(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x1, y1) = (x + w, y + h);
    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x1, y, color));
    out.push(Vertex::new(x1, y1, color));

    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x, y1, color));
}

/// Triangle fan around the disc center
fn push_disc(out: &mut Vec<Vertex>, cx: f32, cy: f32, radius: f32, color: [f32; 4]) {
    for i in 0..DISC_SEGMENTS {
        let a0 = i as f32 / DISC_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / DISC_SEGMENTS as f32 * TAU;
        out.push(Vertex::new(cx, cy, color));
        out.push(Vertex::new(cx + radius * a0.cos(), cy + radius * a0.sin(), color));
        out.push(Vertex::new(cx + radius * a1.cos(), cy + radius * a1.sin(), color));
    }
}
