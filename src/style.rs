use egui::Color32;

/// Lower bound of an entity's text scale
pub const MIN_SCALE: f32 = 0.25;
/// Upper bound of an entity's text scale
pub const MAX_SCALE: f32 = 1.25;

/// Style applied to a drawn stroke's text.
///
/// The current style is copied into each entity at creation time, so later
/// edits never retroactively affect already-drawn strokes. We derive
/// Serialize/Deserialize so the app can persist the current style on shutdown.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Text repeated along the curve
    pub text: String,
    /// Font scale, always within `[MIN_SCALE, MAX_SCALE]`
    pub scale: f32,
    pub color: Color32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: "x".to_owned(),
            scale: 1.0,
            color: Color32::WHITE,
        }
    }
}

impl TextStyle {
    /// Clamp a scale value into the allowed range
    pub fn clamp_scale(scale: f32) -> f32 {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }
}
