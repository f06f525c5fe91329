use egui::Pos2;
use thiserror::Error;

use crate::curve::Curve;
use crate::element::DrawnText;
use crate::id_generator;
use crate::style::TextStyle;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no entity with id {0} in the scene")]
    EntityNotFound(usize),
}

/// Insertion-ordered collection of drawn entities.
///
/// The scene owns every entity; commands and the transform controller refer to
/// entities by id and look them up here.
#[derive(Default)]
pub struct Scene {
    entities: Vec<DrawnText>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity from a finished curve and the current style, keep it
    /// at the end of insertion order and return its id
    pub fn add(&mut self, curve: Curve, style: TextStyle) -> usize {
        let id = id_generator::generate_id();
        self.entities.push(DrawnText::new(id, curve, style));
        id
    }

    /// Remove an entity by id
    pub fn remove(&mut self, id: usize) -> Result<DrawnText, SceneError> {
        let index = self
            .entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or(SceneError::EntityNotFound(id))?;
        Ok(self.entities.remove(index))
    }

    /// Drop every entity. Callers are responsible for also resetting any
    /// command history or tracking state that refers into the scene.
    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }

    /// First entity, in insertion order, whose bounding box contains `pos`.
    /// `None` is a normal outcome, not an error.
    pub fn hit_test(&self, pos: Pos2) -> Option<usize> {
        self.entities.iter().find(|e| e.contains(pos)).map(|e| e.id())
    }

    pub fn get(&self, id: usize) -> Option<&DrawnText> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut DrawnText> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DrawnText> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
