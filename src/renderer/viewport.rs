//! Render surface sizing
//!
//! The surface's pixel dimensions derive from the fixed tile size, the
//! visible grid dimensions, and a display scale factor. Simulation
//! coordinates stay in unscaled world units regardless of the display
//! scale; only the backend applies it.

use crate::consts::{SCALE, TILE, VIEW_H, VIEW_W};

/// Device pixel ratios above this add cost without visible benefit for
/// pixel art
const MAX_DPR: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Display scale multiplier from world units to CSS pixels
    pub scale: f32,
    /// Device pixel ratio, clamped to `MAX_DPR`
    pub dpr: f32,
}

impl Viewport {
    pub fn new(scale: f32, dpr: f32) -> Self {
        Self {
            scale,
            dpr: dpr.clamp(1.0, MAX_DPR),
        }
    }

    /// Visible area in world units
    pub fn view_size(&self) -> (f32, f32) {
        (VIEW_W as f32 * TILE, VIEW_H as f32 * TILE)
    }

    /// Logical (CSS) surface size in pixels
    pub fn css_size(&self) -> (f32, f32) {
        let (w, h) = self.view_size();
        (w * self.scale, h * self.scale)
    }

    /// Physical surface size in device pixels
    pub fn surface_size(&self) -> (u32, u32) {
        let (w, h) = self.css_size();
        ((w * self.dpr).floor() as u32, (h * self.dpr).floor() as u32)
    }

    /// Recompute the scale so the view fits a resized container, keeping
    /// the aspect ratio
    pub fn fit_container(&mut self, container_w: f32, container_h: f32) {
        let (w, h) = self.view_size();
        self.scale = (container_w / w).min(container_h / h).max(0.0);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(SCALE, 1.0)
    }
}
