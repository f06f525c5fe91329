use egui::{Pos2, Vec2};
use textbrush::editor::Editor;
use textbrush::input::GestureEvent;

/// Trace a long horizontal stroke through the editor's pointer surface
fn draw_stroke(editor: &mut Editor, start: Pos2) -> usize {
    editor.pointer_down(start);
    for i in 1..=20 {
        editor.pointer_move(Pos2::new(start.x + i as f32 * 30.0, start.y));
    }
    editor.pointer_up(Pos2::new(start.x + 600.0, start.y));
    editor
        .scene()
        .iter()
        .last()
        .expect("stroke should create an entity")
        .id()
}

fn gesture(centroid: Pos2, pan: Vec2, zoom: f32) -> GestureEvent {
    GestureEvent { centroid, pan, zoom }
}

#[test]
fn test_stroke_creation_is_recorded() {
    let mut editor = Editor::new();
    let id = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));

    assert_eq!(editor.scene().len(), 1);
    assert_eq!(editor.history().len(), 1);
    assert!(editor.scene().get(id).is_some());
}

#[test]
fn test_undo_creation_removes_exactly_that_entity() {
    let mut editor = Editor::new();
    let first = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    let second = draw_stroke(&mut editor, Pos2::new(100.0, 400.0));

    editor.undo();

    assert_eq!(editor.scene().len(), 1);
    assert!(editor.scene().get(first).is_some());
    assert!(editor.scene().get(second).is_none());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut editor = Editor::new();
    editor.undo();
    assert!(editor.scene().is_empty());
    assert!(editor.history().is_empty());
}

#[test]
fn test_transform_session_mutates_one_command() {
    let mut editor = Editor::new();
    let id = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    let centroid = Pos2::new(150.0, 100.0);

    for _ in 0..10 {
        editor.gesture(gesture(centroid, Vec2::new(2.0, 1.0), 1.0));
    }

    // One draw command plus exactly one transform command for the session
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.controller().tracked_entity(), Some(id));
}

#[test]
fn test_gesture_miss_while_idle_is_noop() {
    let mut editor = Editor::new();
    draw_stroke(&mut editor, Pos2::new(100.0, 100.0));

    editor.gesture(gesture(Pos2::new(2000.0, 2000.0), Vec2::new(5.0, 5.0), 1.1));

    assert_eq!(editor.history().len(), 1);
    assert!(!editor.controller().is_tracking());
}

#[test]
fn test_tracking_ignores_centroid_after_start() {
    let mut editor = Editor::new();
    let first = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    let second = draw_stroke(&mut editor, Pos2::new(100.0, 400.0));

    // Start tracking the first entity, then move the centroid over the second
    editor.gesture(gesture(Pos2::new(150.0, 100.0), Vec2::new(1.0, 0.0), 1.0));
    let before = editor.scene().get(second).unwrap().bounds();
    editor.gesture(gesture(Pos2::new(150.0, 400.0), Vec2::new(10.0, 0.0), 1.0));

    assert_eq!(editor.controller().tracked_entity(), Some(first));
    let after = editor.scene().get(second).unwrap().bounds();
    assert_eq!(before, after, "untracked entity must not move");
}

#[test]
fn test_undo_restores_position_and_scale_exactly() {
    let mut editor = Editor::new();
    let id = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    let before_bounds = editor.scene().get(id).unwrap().bounds();
    let before_scale = editor.scene().get(id).unwrap().style().scale;

    let centroid = Pos2::new(150.0, 100.0);
    for i in 0..25 {
        let pan = Vec2::new(3.7 + i as f32 * 0.3, -2.1);
        let zoom = if i % 2 == 0 { 1.01 } else { 0.995 };
        editor.gesture(gesture(centroid, pan, zoom));
    }

    editor.undo();

    let entity = editor.scene().get(id).unwrap();
    assert!((entity.style().scale - before_scale).abs() < 0.001);
    assert!((entity.bounds().min.x - before_bounds.min.x).abs() < 0.01);
    assert!((entity.bounds().min.y - before_bounds.min.y).abs() < 0.01);
    assert!((entity.bounds().max.x - before_bounds.max.x).abs() < 0.01);
    assert!((entity.bounds().max.y - before_bounds.max.y).abs() < 0.01);
}

#[test]
fn test_zoom_clamps_at_both_ends() {
    let mut editor = Editor::new();
    let id = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    let centroid = Pos2::new(150.0, 100.0);

    for _ in 0..50 {
        editor.gesture(gesture(centroid, Vec2::ZERO, 1.5));
    }
    assert!((editor.scene().get(id).unwrap().style().scale - 1.25).abs() < 0.001);

    for _ in 0..50 {
        editor.gesture(gesture(centroid, Vec2::ZERO, 0.5));
    }
    assert!((editor.scene().get(id).unwrap().style().scale - 0.25).abs() < 0.001);
}

#[test]
fn test_undo_of_active_transform_ends_tracking() {
    let mut editor = Editor::new();
    draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    editor.gesture(gesture(Pos2::new(150.0, 100.0), Vec2::new(4.0, 0.0), 1.0));
    assert!(editor.controller().is_tracking());

    editor.undo();

    assert!(!editor.controller().is_tracking());
    assert_eq!(editor.history().len(), 1); // the creation is still undoable
}

#[test]
fn test_gesture_ended_keeps_geometry_and_history() {
    let mut editor = Editor::new();
    let id = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    editor.gesture(gesture(Pos2::new(150.0, 100.0), Vec2::new(8.0, 6.0), 1.0));
    let moved_bounds = editor.scene().get(id).unwrap().bounds();

    editor.gesture_ended();

    assert!(!editor.controller().is_tracking());
    assert_eq!(editor.scene().get(id).unwrap().bounds(), moved_bounds);
    assert_eq!(editor.history().len(), 2);

    // A later session records a fresh transform command
    editor.gesture(gesture(Pos2::new(158.0, 106.0), Vec2::new(1.0, 0.0), 1.0));
    assert_eq!(editor.history().len(), 3);

    // Undoing both sessions restores the original position
    editor.undo();
    editor.undo();
    let entity = editor.scene().get(id).unwrap();
    assert!((entity.bounds().min.x - (moved_bounds.min.x - 8.0)).abs() < 0.01);
}

#[test]
fn test_new_stroke_ends_tracking_session() {
    let mut editor = Editor::new();
    draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    editor.gesture(gesture(Pos2::new(150.0, 100.0), Vec2::new(4.0, 0.0), 1.0));
    assert!(editor.controller().is_tracking());

    draw_stroke(&mut editor, Pos2::new(100.0, 400.0));

    // The creation command sits at the tail, so the session must have ended
    assert!(!editor.controller().is_tracking());
    assert_eq!(editor.history().len(), 3);
}

#[test]
fn test_clear_then_undo_is_noop() {
    let mut editor = Editor::new();
    draw_stroke(&mut editor, Pos2::new(100.0, 100.0));
    editor.gesture(gesture(Pos2::new(150.0, 100.0), Vec2::new(4.0, 0.0), 1.0));

    editor.clear();

    assert!(editor.scene().is_empty());
    assert!(editor.history().is_empty());
    assert!(!editor.controller().is_tracking());

    editor.undo();
    assert!(editor.scene().is_empty());
}

#[test]
fn test_style_is_copied_at_creation() {
    let mut editor = Editor::new();
    editor.set_text("hello".to_owned());
    editor.set_scale(0.5);
    let id = draw_stroke(&mut editor, Pos2::new(100.0, 100.0));

    // Later style edits never retroactively affect existing entities
    editor.set_text("changed".to_owned());
    editor.set_scale(1.0);

    let entity = editor.scene().get(id).unwrap();
    assert_eq!(entity.style().text, "hello");
    assert!((entity.style().scale - 0.5).abs() < 0.001);
}
