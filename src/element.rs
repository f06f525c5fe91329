use egui::{Pos2, Rect, Vec2};

use crate::curve::Curve;
use crate::geometry;
use crate::style::TextStyle;

/// Margin added around a curve's tight bounds on all four sides
pub const BOUNDS_SLOP: f32 = 7.0;

/// One drawn stroke: a curve, the style captured at creation time, and the
/// padded bounding box used for hit testing.
///
/// The bounding box always equals the curve's tight bounds expanded by
/// [`BOUNDS_SLOP`]; curve and bounds are only ever moved together.
#[derive(Debug, Clone)]
pub struct DrawnText {
    id: usize,
    curve: Curve,
    style: TextStyle,
    bounds: Rect,
}

impl DrawnText {
    pub fn new(id: usize, curve: Curve, style: TextStyle) -> Self {
        let bounds = geometry::expand_rect(curve.bounds(), BOUNDS_SLOP);
        Self {
            id,
            curve,
            style,
            bounds,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Test whether a point falls within the entity's padded bounds
    pub fn contains(&self, pos: Pos2) -> bool {
        self.bounds.contains(pos)
    }

    /// Move the curve and its bounding box together
    pub fn translate(&mut self, delta: Vec2) {
        self.curve.translate(delta);
        self.bounds = self.bounds.translate(delta);
    }

    /// Set the text scale, clamped into the allowed range
    pub fn set_scale(&mut self, scale: f32) {
        self.style.scale = TextStyle::clamp_scale(scale);
    }
}
