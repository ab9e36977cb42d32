use crate::foundation::core::{Affine, Point, Vec2};

/// Zoom bounds and fixed input steps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Pan distance for one arrow key press or nav button click.
    pub pan_step: f64,
    /// Zoom change for one `+`/`-` key press.
    pub key_zoom_step: f64,
    /// Zoom change for one zoom button click.
    pub button_zoom_step: f64,
    /// Zoom change per unit of wheel delta (sign is inverted on apply).
    pub wheel_zoom_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.3,
            max_zoom: 2.5,
            pan_step: 80.0,
            key_zoom_step: 0.15,
            button_zoom_step: 0.2,
            wheel_zoom_factor: 0.001,
        }
    }
}

impl ViewportConfig {
    pub fn clamp_zoom(&self, z: f64) -> f64 {
        z.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Pan offset and zoom factor applied to the content layer.
///
/// Pan is unbounded. Zoom always stays within the configured range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub pan: Vec2,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn apply_pan(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub fn apply_zoom_delta(&mut self, delta: f64, cfg: &ViewportConfig) {
        if delta.is_nan() {
            return;
        }
        self.zoom = cfg.clamp_zoom(self.zoom + delta);
    }

    pub fn set_zoom_absolute(&mut self, z: f64, cfg: &ViewportConfig) {
        if z.is_nan() {
            return;
        }
        self.zoom = cfg.clamp_zoom(z);
    }

    /// `translate(pan) * scale(zoom)` with the origin at the content's top-left.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Map a content-space point to screen space.
    pub fn to_screen(&self, p: Point) -> Point {
        self.transform() * p
    }

    /// Map a screen-space point back to content space.
    pub fn to_content(&self, p: Point) -> Point {
        self.transform().inverse() * p
    }

    /// Zoom readout as a whole percentage.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/viewport.rs"]
mod tests;
