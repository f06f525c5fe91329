use egui::{Color32, Slider};

use crate::editor::Editor;
use crate::input::GestureEvent;
use crate::renderer::Renderer;
use crate::style::{MAX_SCALE, MIN_SCALE, TextStyle};

/// Color choices offered in the style window
const STYLE_COLORS: [(&str, Color32); 4] = [
    ("White", Color32::WHITE),
    ("Red", Color32::RED),
    ("Blue", Color32::BLUE),
    ("Green", Color32::GREEN),
];

/// We derive Deserialize/Serialize so we can persist app settings on shutdown.
/// Only the settings are persisted; the scene always starts empty.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct TextBrushApp {
    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    show_style_window: bool,
    /// true: drags trace strokes; false: drags pan/zoom one entity
    draw_mode: bool,
    style: TextStyle,
}

impl Default for TextBrushApp {
    fn default() -> Self {
        Self {
            editor: Editor::new(),
            renderer: Renderer::new(),
            show_style_window: false,
            draw_mode: true,
            style: TextStyle::default(),
        }
    }
}

impl TextBrushApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.editor.set_style(app.style.clone());
        app
    }

    fn set_draw_mode(&mut self, draw_mode: bool) {
        if self.draw_mode != draw_mode {
            self.draw_mode = draw_mode;
            // Leaving transform mode always ends the tracking session
            self.editor.gesture_ended();
        }
    }

    /// Route canvas interaction into the editor, depending on the mode
    fn handle_canvas_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if self.draw_mode {
            if let Some(pos) = response.interact_pointer_pos() {
                if response.drag_started() {
                    self.editor.pointer_down(pos);
                } else if response.dragged() {
                    self.editor.pointer_move(pos);
                }
            }
            if response.drag_stopped() {
                // The release position is not needed; the trace already holds
                // its final point.
                let pos = response
                    .interact_pointer_pos()
                    .or_else(|| response.hover_pos())
                    .unwrap_or_default();
                self.editor.pointer_up(pos);
            }
        } else {
            let zoom = ui.input(|i| i.zoom_delta());
            let centroid = response
                .interact_pointer_pos()
                .or_else(|| response.hover_pos());

            if let Some(centroid) = centroid {
                if response.dragged() || zoom != 1.0 {
                    self.editor.gesture(GestureEvent {
                        centroid,
                        pan: response.drag_delta(),
                        zoom,
                    });
                }
            }
            if response.drag_stopped() {
                self.editor.gesture_ended();
            }
        }
    }

    fn style_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_style_window;
        egui::Window::new("Edit Style")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Draw text");
                if ui.text_edit_singleline(&mut self.style.text).changed() {
                    self.editor.set_text(self.style.text.clone());
                }

                ui.add_space(8.0);
                ui.label("Draw size");
                if ui
                    .add(Slider::new(&mut self.style.scale, MIN_SCALE..=MAX_SCALE))
                    .changed()
                {
                    self.editor.set_scale(self.style.scale);
                }

                ui.add_space(8.0);
                ui.label("Draw color");
                ui.horizontal(|ui| {
                    for (name, color) in STYLE_COLORS {
                        let selected = self.style.color == color;
                        if ui
                            .add(egui::Button::new(name).fill(color.gamma_multiply(0.3)))
                            .on_hover_text(name)
                            .clicked()
                            && !selected
                        {
                            self.style.color = color;
                            self.editor.set_color(color);
                        }
                    }
                });
            });
        self.show_style_window = open;
    }
}

impl eframe::App for TextBrushApp {
    /// Called by the framework to save settings before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.selectable_label(self.draw_mode, "✏ Draw").clicked() {
                    self.set_draw_mode(true);
                }
                if ui.selectable_label(!self.draw_mode, "✋ Transform").clicked() {
                    self.set_draw_mode(false);
                }
                ui.separator();
                if ui.button("⟲ Undo").clicked() {
                    self.editor.undo();
                }
                if ui.button("🗑 Clear").clicked() {
                    self.editor.clear();
                }
                ui.separator();
                if ui.button("Style…").clicked() {
                    self.show_style_window = !self.show_style_window;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.editor.undo();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                self.handle_canvas_input(ui, &response);
                self.renderer.draw_scene(&painter, response.rect, &self.editor);
            });

        self.style_window(ctx);
    }
}
