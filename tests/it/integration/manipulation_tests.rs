//! Move and resize integration tests.

use crate::helpers::{
    BLOCK, MOUSE, TestEngineBuilder, assert_in_bounds, assert_single_elevation, drag, id,
    plain_engine, position_of, size_of, spawn_settled,
};
use pagecanvas::clamp::ResizeBoundary;
use pagecanvas::input::{ControllerConfig, DragState};
use pagecanvas::types::{Margins, ResizeEdges};
use pagecanvas::{GestureOutcome, PointerEvent, PointerTarget};

fn handle(element: &str, edges: ResizeEdges) -> PointerTarget {
    PointerTarget::ResizeHandle {
        id: id(element),
        edges,
    }
}

#[test]
fn test_move_is_relative_to_grab_point() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    // grabbing off-center does not make the element jump
    engine.handle_pointer(PointerEvent::down(
        MOUSE,
        (400.0, 140.0),
        PointerTarget::Element(id("element-1")),
    ));
    engine.handle_pointer(PointerEvent::moved(MOUSE, (401.0, 141.0)));
    assert_eq!(position_of(&engine, "element-1"), (100.0, 50.0));

    engine.handle_pointer(PointerEvent::moved(MOUSE, (437.0, 262.0)));
    assert_eq!(position_of(&engine, "element-1"), (140.0, 170.0));
}

#[test]
fn test_move_never_leaves_page() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    let path = [(900.0, 100.0), (1500.0, 2000.0), (-800.0, -800.0), (300.0, 2500.0)];
    engine.handle_pointer(PointerEvent::down(
        MOUSE,
        (200.0, 100.0),
        PointerTarget::Element(id("element-1")),
    ));
    for point in path {
        engine.handle_pointer(PointerEvent::moved(MOUSE, point));
        assert_in_bounds(&engine);
    }
    engine.handle_pointer(PointerEvent::up(MOUSE, (300.0, 2500.0)));
    assert_eq!(position_of(&engine, "element-1"), (200.0, 1022.0));
}

#[test]
fn test_only_one_element_elevated_across_gestures() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 400.0));

    for target in ["element-1", "element-2", "element-1"] {
        engine.handle_pointer(PointerEvent::down(
            MOUSE,
            (150.0, 100.0),
            PointerTarget::Element(id(target)),
        ));
        assert_single_elevation(&engine);
        assert_eq!(
            engine.registry().elevated().map(|e| e.id.as_str()),
            Some(target)
        );
        engine.handle_pointer(PointerEvent::up(MOUSE, (150.0, 100.0)));
        assert_eq!(engine.registry().elevated_count(), 0);
    }
}

#[test]
fn test_resize_bottom_right_snaps_edges() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    let outcome = drag(
        &mut engine,
        handle("element-1", ResizeEdges::BOTTOM_RIGHT),
        (440.0, 150.0),
        &[(470.0, 180.0), (503.0, 212.0)],
    );
    assert_eq!(outcome, GestureOutcome::Released(id("element-1")));
    assert_eq!(position_of(&engine, "element-1"), (100.0, 50.0));
    assert_eq!(size_of(&engine, "element-1"), (400.0, 160.0));
}

#[test]
fn test_resize_top_left_keeps_opposite_corner() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    drag(
        &mut engine,
        handle("element-1", ResizeEdges::TOP_LEFT),
        (100.0, 50.0),
        &[(60.0, 20.0)],
    );
    assert_eq!(position_of(&engine, "element-1"), (60.0, 20.0));
    assert_eq!(size_of(&engine, "element-1"), (380.0, 130.0));
}

#[test]
fn test_resize_respects_margin_inset_policy() {
    let (mut engine, clock) = TestEngineBuilder::new()
        .with_margins(Margins::standard())
        .build();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 100.0));
    assert_eq!(position_of(&engine, "element-1"), (100.0, 100.0));

    drag(
        &mut engine,
        handle("element-1", ResizeEdges::TOP_LEFT),
        (100.0, 100.0),
        &[(0.0, 0.0)],
    );
    assert_eq!(position_of(&engine, "element-1"), (76.0, 76.0));
    assert_eq!(size_of(&engine, "element-1"), (364.0, 124.0));

    drag(
        &mut engine,
        handle("element-1", ResizeEdges::RIGHT),
        (440.0, 150.0),
        &[(900.0, 150.0)],
    );
    assert_eq!(size_of(&engine, "element-1").0, 793.0 - 76.0 - 76.0);
    assert_in_bounds(&engine);
}

#[test]
fn test_resize_full_page_policy_ignores_margins() {
    let config = ControllerConfig {
        resize_boundary: ResizeBoundary::FullPage,
        ..Default::default()
    };
    let (mut engine, clock) = TestEngineBuilder::new()
        .with_margins(Margins::standard())
        .with_config(config)
        .build();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 100.0));

    drag(
        &mut engine,
        handle("element-1", ResizeEdges::TOP_LEFT),
        (100.0, 100.0),
        &[(-50.0, -50.0)],
    );
    assert_eq!(position_of(&engine, "element-1"), (0.0, 0.0));
    assert_eq!(size_of(&engine, "element-1"), (440.0, 200.0));
}

#[test]
fn test_resize_stops_at_minimum_size() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    drag(
        &mut engine,
        handle("element-1", ResizeEdges::BOTTOM_RIGHT),
        (440.0, 150.0),
        &[(0.0, 0.0)],
    );
    assert_eq!(position_of(&engine, "element-1"), (100.0, 50.0));
    assert_eq!(size_of(&engine, "element-1"), (20.0, 20.0));
}

#[test]
fn test_resize_without_snapping() {
    let config = ControllerConfig {
        snap_resize: false,
        ..Default::default()
    };
    let (mut engine, clock) = TestEngineBuilder::new().with_config(config).build();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    drag(
        &mut engine,
        handle("element-1", ResizeEdges::RIGHT),
        (440.0, 100.0),
        &[(453.0, 100.0)],
    );
    assert_eq!(size_of(&engine, "element-1"), (353.0, 100.0));
}

#[test]
fn test_hit_tested_resize_from_view_coordinates() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, BLOCK, (103.0, 47.0));

    assert_eq!(
        engine.pointer_down_at(MOUSE, (437.0, 147.0)),
        GestureOutcome::Started(DragState::Resizing)
    );
    engine.handle_pointer(PointerEvent::moved(MOUSE, (497.0, 147.0)));
    engine.handle_pointer(PointerEvent::up(MOUSE, (497.0, 147.0)));
    assert_eq!(size_of(&engine, "element-1"), (400.0, 100.0));
}

#[test]
fn test_resizing_undersized_block_at_page_edge_stays_on_page() {
    let (mut engine, clock) = plain_engine();
    spawn_settled(&mut engine, &clock, (5.0, 5.0), (792.0, 500.0));
    assert_eq!(position_of(&engine, "element-1"), (788.0, 500.0));

    let outcome = drag(
        &mut engine,
        handle("element-1", ResizeEdges::RIGHT),
        (793.0, 502.0),
        &[(796.0, 502.0)],
    );

    assert_eq!(outcome, GestureOutcome::Released(id("element-1")));
    assert_eq!(position_of(&engine, "element-1"), (773.0, 500.0));
    assert_eq!(size_of(&engine, "element-1"), (20.0, 5.0));
    assert_in_bounds(&engine);
}
