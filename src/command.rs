use egui::Vec2;
use log::warn;

use crate::scene::Scene;

/// An operation recorded for undo.
///
/// Commands refer to scene entities by id; the scene stays the single owner of
/// the entities themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A stroke was finalized and its entity added to the scene
    DrawText { element_id: usize },
    /// A gesture session moved and scaled one entity. `offset` accumulates
    /// every pan of the session; `original_scale` is the scale before it.
    Transform {
        element_id: usize,
        offset: Vec2,
        original_scale: f32,
    },
}

impl Command {
    /// Inverse-apply this command against the scene
    fn undo(&self, scene: &mut Scene) {
        match self {
            Command::DrawText { element_id } => {
                if let Err(err) = scene.remove(*element_id) {
                    warn!("undo of draw command failed: {err}");
                }
            }
            Command::Transform {
                element_id,
                offset,
                original_scale,
            } => {
                if let Some(entity) = scene.get_mut(*element_id) {
                    entity.translate(-*offset);
                    entity.set_scale(*original_scale);
                } else {
                    warn!("undo of transform: entity {element_id} not in scene");
                }
            }
        }
    }
}

/// Append-only undo history over draw and transform commands.
///
/// There is no redo: undo pops the tail, inverse-applies it and discards it.
#[derive(Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed command
    pub fn push(&mut self, command: Command) {
        self.undo_stack.push(command);
    }

    /// The most recent command, mutable. A tracking session updates its
    /// transform command in place through this instead of appending new ones.
    pub fn last_mut(&mut self) -> Option<&mut Command> {
        self.undo_stack.last_mut()
    }

    pub fn last(&self) -> Option<&Command> {
        self.undo_stack.last()
    }

    /// Remove and inverse-apply the most recent command. A no-op on an empty
    /// history. Returns the undone command so callers can react to it (the
    /// transform controller ends tracking when its active command is undone).
    pub fn undo(&mut self, scene: &mut Scene) -> Option<Command> {
        let command = self.undo_stack.pop()?;
        command.undo(scene);
        Some(command)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
