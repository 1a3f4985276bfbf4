//! End-to-end scenarios on a 793x1122 page with a 10-unit grid and no margins.

use crate::helpers::{
    BLOCK, MOUSE, assert_element_count, assert_in_bounds, id, palette, plain_engine,
    position_of, size_of, spawn_block,
};
use pagecanvas::input::DragState;
use pagecanvas::{GestureOutcome, PointerEvent, PointerTarget};
use std::time::Duration;

#[test]
fn test_spawn_snaps_to_grid() {
    let (mut engine, _clock) = plain_engine();
    let outcome = spawn_block(&mut engine, BLOCK, (103.0, 47.0));

    assert_eq!(outcome, GestureOutcome::Spawned(id("element-1")));
    assert!(outcome.mutated());
    assert_eq!(position_of(&engine, "element-1"), (100.0, 50.0));
    assert_eq!(size_of(&engine, "element-1"), (340.0, 100.0));
    let element = engine.registry().get(&id("element-1")).unwrap();
    assert!(element.visible);
    assert!(!element.is_elevated());
    assert!(engine.state().is_idle());
    assert!(engine.ghost().is_none());
}

#[test]
fn test_move_past_left_edge_clamps() {
    let (mut engine, _clock) = plain_engine();
    spawn_block(&mut engine, BLOCK, (103.0, 47.0));

    engine.handle_pointer(PointerEvent::down(
        MOUSE,
        (200.0, 100.0),
        PointerTarget::Element(id("element-1")),
    ));
    let outcome = engine.handle_pointer(PointerEvent::moved(MOUSE, (50.0, 100.0)));
    assert_eq!(outcome, GestureOutcome::Moved(id("element-1")));
    assert_eq!(position_of(&engine, "element-1"), (0.0, 50.0));

    engine.handle_pointer(PointerEvent::up(MOUSE, (50.0, 100.0)));
    assert_eq!(position_of(&engine, "element-1"), (0.0, 50.0));
    assert_in_bounds(&engine);
}

#[test]
fn test_drop_outside_surface_is_discarded() {
    let (mut engine, _clock) = plain_engine();
    let before = engine.registry().len();
    let revision = engine.registry().revision();

    let outcome = spawn_block(&mut engine, BLOCK, (900.0, 300.0));

    assert_eq!(outcome, GestureOutcome::Discarded);
    assert!(!outcome.mutated());
    assert_element_count(&engine, before);
    assert_eq!(engine.registry().revision(), revision);
    assert!(engine.state().is_idle());
}

#[test]
fn test_second_spawn_inside_debounce_window_is_ignored() {
    let (mut engine, clock) = plain_engine();
    assert!(matches!(
        spawn_block(&mut engine, BLOCK, (103.0, 47.0)),
        GestureOutcome::Spawned(_)
    ));

    clock.advance(Duration::from_millis(40));
    assert_eq!(
        spawn_block(&mut engine, BLOCK, (300.0, 400.0)),
        GestureOutcome::Debounced
    );
    assert_element_count(&engine, 1);

    clock.advance(Duration::from_millis(60));
    assert!(matches!(
        spawn_block(&mut engine, BLOCK, (300.0, 400.0)),
        GestureOutcome::Spawned(_)
    ));
    assert_element_count(&engine, 2);
}

#[test]
fn test_ghost_tracks_pointer_and_cue() {
    let (mut engine, _clock) = plain_engine();
    engine.handle_pointer(PointerEvent::down(MOUSE, (-200.0, 300.0), palette(BLOCK)));
    assert_eq!(engine.state(), DragState::SpawningGhost);
    assert!(!engine.ghost().unwrap().inside_surface);

    assert_eq!(
        engine.handle_pointer(PointerEvent::moved(MOUSE, (400.0, 300.0))),
        GestureOutcome::GhostMoved { inside: true }
    );
    let ghost = engine.ghost().unwrap();
    assert_eq!(ghost.position, (230.0, 250.0));
    assert_element_count(&engine, 0);
}
