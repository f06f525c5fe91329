use egui::{Pos2, Rect, Vec2};

use crate::geometry;
use crate::spline::ControlPair;

/// Number of line segments each cubic is subdivided into when flattening
const FLATTEN_STEPS: usize = 16;

/// Geometry of one drawn stroke.
///
/// Strokes long enough to be resampled are fitted as a piecewise cubic spline;
/// very short strokes keep their raw traced polyline unchanged.
#[derive(Debug, Clone)]
pub enum Curve {
    /// Piecewise cubic Bezier: segment `i` runs from `knots[i]` to
    /// `knots[i + 1]` via `controls[i]`. Invariant:
    /// `controls.len() == knots.len() - 1` with at least two knots.
    Spline {
        knots: Vec<Pos2>,
        controls: Vec<ControlPair>,
    },
    /// Raw traced polyline (short-stroke bypass, no fitting)
    Polyline { points: Vec<Pos2> },
}

impl Curve {
    pub fn spline(knots: Vec<Pos2>, controls: Vec<ControlPair>) -> Self {
        debug_assert!(knots.len() >= 2);
        debug_assert_eq!(controls.len(), knots.len() - 1);
        Self::Spline { knots, controls }
    }

    pub fn polyline(points: Vec<Pos2>) -> Self {
        Self::Polyline { points }
    }

    /// Approximate the curve as a polyline for measuring and drawing
    pub fn flatten(&self) -> Vec<Pos2> {
        match self {
            Self::Polyline { points } => points.clone(),
            Self::Spline { knots, controls } => {
                let mut out = Vec::with_capacity(controls.len() * FLATTEN_STEPS + 1);
                out.push(knots[0]);
                for (i, pair) in controls.iter().enumerate() {
                    let (p0, p3) = (knots[i], knots[i + 1]);
                    for step in 1..=FLATTEN_STEPS {
                        let t = step as f32 / FLATTEN_STEPS as f32;
                        out.push(cubic_point(p0, pair.first, pair.second, p3, t));
                    }
                }
                out
            }
        }
    }

    /// Tight bounding box of the curve's geometry (no padding)
    pub fn bounds(&self) -> Rect {
        geometry::tight_bounds(&self.flatten())
    }

    /// Move every point of the curve by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Self::Polyline { points } => {
                for point in points.iter_mut() {
                    *point += delta;
                }
            }
            Self::Spline { knots, controls } => {
                for knot in knots.iter_mut() {
                    *knot += delta;
                }
                for pair in controls.iter_mut() {
                    pair.first += delta;
                    pair.second += delta;
                }
            }
        }
    }
}

/// Evaluate a cubic Bezier at parameter `t`
fn cubic_point(p0: Pos2, c1: Pos2, c2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Pos2::new(
        b0 * p0.x + b1 * c1.x + b2 * c2.x + b3 * p3.x,
        b0 * p0.y + b1 * c1.y + b2 * c2.y + b3 * p3.y,
    )
}
