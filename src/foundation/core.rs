pub use kurbo::{Affine, Point, Vec2};

/// Stable identity key of a catalog atom.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AtomId(pub u32);

impl std::fmt::Display for AtomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Straight (non-premultiplied) HSL color, as authored for tier themes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64, // percent 0..100
    pub l: f64, // percent 0..100
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// CSS `hsl(...)` notation, optionally with an alpha component.
    pub fn css(self, alpha: Option<f64>) -> String {
        match alpha {
            Some(a) => format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, a),
            None => format!("hsl({}, {}%, {}%)", self.h, self.s, self.l),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
