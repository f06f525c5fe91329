use egui::{Pos2, Vec2};

/// Pointer events consumed by the stroke tracer.
///
/// The core consumes this stream; decoding platform event objects into it is
/// the UI layer's job.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// Pointer pressed; starts a trace
    Down(Pos2),
    /// Pointer moved; subject to the sampler's distance filter
    Move(Pos2),
    /// Pointer released; finalizes the trace
    Up(Pos2),
}

/// One step of a two-pointer transform gesture
#[derive(Debug, Clone, Copy)]
pub struct GestureEvent {
    /// Center of the gesture, used for the initial hit test only
    pub centroid: Pos2,
    /// Translation since the previous event
    pub pan: Vec2,
    /// Zoom factor since the previous event; 1.0 means no zoom
    pub zoom: f32,
}
