use egui::Pos2;
use log::info;

use crate::curve::Curve;
use crate::geometry::PathMeasure;
use crate::spline::fit_control_points;

/// Minimum distance a pointer must travel before a new trace point is kept
pub const MIN_TRACK_DIST: f32 = 20.0;
/// Arc-length spacing of the knots resampled from a finished trace
pub const SAMPLE_LENGTH: f32 = 170.0;

/// Reduces a raw pointer trace into the knots a curve is fitted through.
///
/// While tracing, points closer than [`MIN_TRACK_DIST`] to the last kept point
/// are dropped, which suppresses jitter from dense raw samples. On finish the
/// coarse trace is resampled at equal arc-length steps of [`SAMPLE_LENGTH`].
#[derive(Default)]
pub struct StrokeSampler {
    trace: Vec<Pos2>,
    tracing: bool,
}

impl StrokeSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new trace at the pointer-down position
    pub fn begin(&mut self, pos: Pos2) {
        self.trace.clear();
        self.trace.push(pos);
        self.tracing = true;
    }

    /// Feed a pointer-move position; kept only past the distance threshold
    pub fn push(&mut self, pos: Pos2) {
        if !self.tracing {
            return;
        }
        if let Some(last) = self.trace.last() {
            if last.distance(pos) > MIN_TRACK_DIST {
                self.trace.push(pos);
            }
        }
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    /// The coarse polyline traced so far (for live preview rendering)
    pub fn trace(&self) -> &[Pos2] {
        &self.trace
    }

    /// Finish the trace and build the stroke's final geometry.
    ///
    /// Emits `floor(L / SAMPLE_LENGTH)` knots at equal arc-length steps plus
    /// the literal final traced point. Two or fewer knots bypass the spline
    /// fitter entirely and keep the raw trace as a polyline.
    pub fn finish(&mut self) -> Curve {
        self.tracing = false;
        let trace = std::mem::take(&mut self.trace);

        let measure = PathMeasure::new(trace.clone());
        let sample_points = (measure.length() / SAMPLE_LENGTH).floor() as usize;

        let mut knots = Vec::with_capacity(sample_points + 1);
        for i in 0..sample_points {
            knots.push(measure.pos_at(i as f32 * SAMPLE_LENGTH));
        }
        // The last knot is always the literal end of the trace, even when its
        // arc-length gap to the previous knot is shorter than SAMPLE_LENGTH.
        if let Some(last) = trace.last() {
            knots.push(*last);
        }

        if knots.len() <= 2 {
            info!("stroke too short for fitting, keeping {} raw points", trace.len());
            return Curve::polyline(trace);
        }

        info!("fitting spline through {} knots", knots.len());
        let controls = fit_control_points(&knots);
        Curve::spline(knots, controls)
    }
}
