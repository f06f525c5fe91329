use egui::{Color32, Pos2};
use log::info;

use crate::command::{Command, CommandHistory};
use crate::input::{GestureEvent, PointerEvent};
use crate::sampler::StrokeSampler;
use crate::scene::Scene;
use crate::style::TextStyle;
use crate::transform::TransformController;

/// The complete event surface of the drawing core.
///
/// Owns the scene, the undo history, the transform controller and the stroke
/// sampler, and wires them together the way the UI expects: pointer events
/// trace strokes, gesture events transform entities, undo and clear come from
/// the host's control surface. Everything runs on the single UI thread and
/// nothing here blocks.
#[derive(Default)]
pub struct Editor {
    scene: Scene,
    history: CommandHistory,
    controller: TransformController,
    sampler: StrokeSampler,
    /// Style copied into each entity at stroke finalization
    current_style: TextStyle,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn controller(&self) -> &TransformController {
        &self.controller
    }

    pub fn sampler(&self) -> &StrokeSampler {
        &self.sampler
    }

    pub fn current_style(&self) -> &TextStyle {
        &self.current_style
    }

    /// Route one pointer event into the stroke tracer
    pub fn pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up(pos) => self.pointer_up(pos),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        // A new stroke's creation command must land at the history tail, so
        // any still-active transform session ends here.
        self.controller.end_gesture();
        self.sampler.begin(pos);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.sampler.push(pos);
    }

    /// Finalize the trace into an entity and record its creation
    pub fn pointer_up(&mut self, _pos: Pos2) {
        if !self.sampler.is_tracing() {
            return;
        }
        let curve = self.sampler.finish();
        let id = self.scene.add(curve, self.current_style.clone());
        self.history.push(Command::DrawText { element_id: id });
        info!("created entity {id} ({} in scene)", self.scene.len());
    }

    /// Consume one step of a two-pointer gesture
    pub fn gesture(&mut self, event: GestureEvent) {
        self.controller
            .handle_gesture(&mut self.scene, &mut self.history, event);
    }

    /// The physical gesture released; tracking ends, geometry stays put
    pub fn gesture_ended(&mut self) {
        self.controller.end_gesture();
    }

    /// Remove and inverse-apply the most recent operation. No-op when the
    /// history is empty.
    pub fn undo(&mut self) {
        if let Some(command) = self.history.undo(&mut self.scene) {
            self.controller.notify_undone(&command);
        }
    }

    /// Empty the scene. Also resets the history and ends tracking, so nothing
    /// keeps referring to entities that no longer exist.
    pub fn clear(&mut self) {
        self.controller.end_gesture();
        self.history.clear();
        self.scene.clear_entities();
    }

    pub fn set_text(&mut self, text: String) {
        self.current_style.text = text;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.current_style.scale = TextStyle::clamp_scale(scale);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.current_style.color = color;
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.current_style = style;
    }
}
