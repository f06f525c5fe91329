use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect};

use crate::editor::Editor;
use crate::geometry::PathMeasure;
use crate::style::TextStyle;

/// Font size at scale 1.0
const BASE_FONT_SIZE: f32 = 80.0;
/// Extra spacing between glyphs, in em
const LETTER_SPACING: f32 = 0.1;

/// Draws the scene: every entity's text repeated along its curve, plus the
/// live preview of a stroke still being traced.
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw_scene(&self, painter: &Painter, canvas: Rect, editor: &Editor) {
        painter.rect_filled(canvas, 0.0, Color32::BLACK);

        for entity in editor.scene().iter() {
            self.draw_text_path(painter, &entity.curve().flatten(), entity.style());
        }

        // The stroke being traced renders the same way over its raw polyline
        if editor.sampler().is_tracing() {
            self.draw_text_path(painter, editor.sampler().trace(), editor.current_style());
        }
    }

    /// Repeat (and truncate) the style's text to exactly cover the path's arc
    /// length, then place each glyph at its arc-length position rotated to the
    /// local tangent.
    fn draw_text_path(&self, painter: &Painter, points: &[Pos2], style: &TextStyle) {
        if style.text.is_empty() {
            return;
        }

        let measure = PathMeasure::new(points.to_vec());
        let path_len = measure.length();
        if path_len <= 0.0 {
            return;
        }

        let font_size = BASE_FONT_SIZE * style.scale;
        let font_id = FontId::proportional(font_size);
        let spacing = LETTER_SPACING * font_size;

        let glyph_advance = |c: char| -> f32 {
            let galley = painter.layout_no_wrap(c.to_string(), font_id.clone(), style.color);
            galley.size().x + spacing
        };

        let text_width: f32 = style.text.chars().map(glyph_advance).sum();
        if text_width <= 0.0 {
            return;
        }

        // How many whole repetitions fit, plus the prefix that covers the rest
        let div = path_len / text_width;
        let char_count = style.text.chars().count();
        let whole_repeats = div.floor() as usize;
        let partial_chars = (char_count as f32 * div.fract()).floor() as usize;

        let mut distance = 0.0f32;
        let full = style.text.chars().cycle();
        let total_chars = whole_repeats * char_count + partial_chars;

        for c in full.take(total_chars) {
            let galley = painter.layout_no_wrap(c.to_string(), font_id.clone(), style.color);
            let advance = galley.size().x + spacing;
            let (pos, tangent) = measure.pos_tangent_at(distance);

            // Lift the glyph so its baseline sits on the path; the shape
            // rotates around its anchor, so the lift is along the local normal.
            let baseline = galley.size().y * 0.8;
            let anchor = pos + egui::Vec2::new(tangent.y, -tangent.x) * baseline;

            painter.add(TextShape::new(anchor, galley, style.color).with_angle(tangent.angle()));
            distance += advance;
        }
    }
}
