use egui::Vec2;
use log::info;

use crate::command::{Command, CommandHistory};
use crate::input::GestureEvent;
use crate::scene::Scene;

/// Multiplier from a gesture's raw zoom delta to a scale delta
pub const ZOOM_FACTOR: f32 = 8.0;

/// Hit-tests gesture events against the scene and applies pan/zoom to at most
/// one tracked entity.
///
/// State machine: while idle, the first gesture event that hits an entity
/// starts a tracking session and records one transform command. Every later
/// event of the session applies to that same entity, wherever the centroid has
/// moved to, and updates the same command in place. A session ends on an
/// explicit end-of-gesture signal, or when its command is undone.
#[derive(Default)]
pub struct TransformController {
    tracked: Option<usize>,
}

impl TransformController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked_entity(&self) -> Option<usize> {
        self.tracked
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    /// Consume one gesture event. While idle, a miss is a no-op.
    pub fn handle_gesture(
        &mut self,
        scene: &mut Scene,
        history: &mut CommandHistory,
        event: GestureEvent,
    ) {
        let element_id = match self.tracked {
            Some(id) => id,
            None => {
                // First entity containing the centroid wins; insertion order
                // breaks ties between overlapping bounds.
                let Some(id) = scene.hit_test(event.centroid) else {
                    return;
                };
                let Some(entity) = scene.get(id) else {
                    return;
                };
                history.push(Command::Transform {
                    element_id: id,
                    offset: Vec2::ZERO,
                    original_scale: entity.style().scale,
                });
                self.tracked = Some(id);
                info!("tracking entity {id}");
                id
            }
        };

        self.apply(scene, history, element_id, event);
    }

    /// Apply one event's delta to the tracked entity and fold the pan into
    /// the session's transform command at the history tail
    fn apply(
        &mut self,
        scene: &mut Scene,
        history: &mut CommandHistory,
        element_id: usize,
        event: GestureEvent,
    ) {
        let Some(entity) = scene.get_mut(element_id) else {
            self.end_gesture();
            return;
        };

        let delta = (event.zoom - 1.0) * ZOOM_FACTOR;
        entity.set_scale(entity.style().scale + delta);
        entity.translate(event.pan);

        if let Some(Command::Transform {
            element_id: id,
            offset,
            ..
        }) = history.last_mut()
        {
            if *id == element_id {
                *offset += event.pan;
            }
        }
    }

    /// End the current tracking session without touching any geometry
    pub fn end_gesture(&mut self) {
        if let Some(id) = self.tracked.take() {
            info!("stopped tracking entity {id}");
        }
    }

    /// React to an undone command: undoing the active transform ends tracking
    pub fn notify_undone(&mut self, command: &Command) {
        if let Command::Transform { element_id, .. } = command {
            if self.tracked == Some(*element_id) {
                self.end_gesture();
            }
        }
    }
}
