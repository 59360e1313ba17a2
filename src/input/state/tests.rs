use super::*;
use crate::draw::{
    RecordingSurface, ShapeKind, Topology, Viewport,
    color::{BLUE, RED, WHITE},
    shape,
};
use crate::input::{MouseButton, Tool};

fn create_test_state() -> SketchState {
    SketchState::with_defaults(Viewport::new(100, 100), RED, WHITE, Tool::Pen, 0)
}

fn viewport() -> Viewport {
    Viewport::new(100, 100)
}

#[test]
fn pen_commits_one_segment_per_motion_event() {
    let mut state = create_test_state();

    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(10, 10);
    state.on_mouse_motion(20, 15);
    state.on_mouse_release(MouseButton::Left, 20, 15);

    assert_eq!(state.store.len(), 2);
    for shape in state.store.shapes() {
        assert_eq!(shape.kind, ShapeKind::Line);
        assert_eq!(shape.color, RED);
    }
    assert_eq!(
        &state.store.vertices()[0..4],
        shape::line_vertices(viewport(), 0, 0, 10, 10).as_slice()
    );
    assert_eq!(state.state, DrawingState::Idle);
}

#[test]
fn eraser_strokes_use_the_background_color() {
    let mut state = create_test_state();
    state.set_tool(Tool::Eraser);

    state.on_mouse_press(MouseButton::Left, 40, 40);
    state.on_mouse_motion(50, 50);
    state.on_mouse_release(MouseButton::Left, 50, 50);

    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.shapes()[0].kind, ShapeKind::Line);
    assert_eq!(state.store.shapes()[0].color, WHITE);
}

#[test]
fn line_tool_commits_only_at_release() {
    let mut state = create_test_state();
    state.set_tool(Tool::Line);

    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_motion(30, 20);
    assert!(state.store.is_empty());

    state.on_mouse_release(MouseButton::Left, 50, 30);
    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.shapes()[0].kind, ShapeKind::Line);
    assert_eq!(
        state.store.vertices(),
        shape::line_vertices(viewport(), 10, 10, 50, 30).as_slice()
    );
}

#[test]
fn square_commit_snaps_to_shorter_delta() {
    let mut state = create_test_state();
    state.set_tool(Tool::Square);

    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_release(MouseButton::Left, 50, 30);

    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.shapes()[0].kind, ShapeKind::Square);
    // Shorter delta is 20, so the opposite corner sits at (30, 30).
    assert_eq!(
        state.store.vertices(),
        shape::square_vertices(viewport(), 10, 10, 50, 30).as_slice()
    );

    let vp = viewport();
    let (bx, by) = vp.to_ndc(30, 30);
    assert_eq!(&state.store.vertices()[4..6], &[bx, by]);
}

#[test]
fn rect_commit_stores_five_vertex_pairs() {
    let mut state = create_test_state();
    state.set_tool(Tool::Rect);

    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_release(MouseButton::Left, 60, 40);

    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.shapes()[0].kind, ShapeKind::Rect);
    assert_eq!(state.store.vertices().len(), 5 * 2);
}

#[test]
fn right_click_cancels_the_gesture() {
    let mut state = create_test_state();
    state.set_tool(Tool::Line);

    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_motion(30, 30);
    state.on_mouse_press(MouseButton::Right, 30, 30);

    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.store.is_empty());

    // A release after the cancel must not commit anything.
    state.on_mouse_release(MouseButton::Left, 40, 40);
    assert!(state.store.is_empty());
}

#[test]
fn tool_switch_mid_drag_does_not_affect_the_gesture() {
    let mut state = create_test_state();
    state.set_tool(Tool::Line);

    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.set_tool(Tool::Rect);
    state.on_mouse_release(MouseButton::Left, 20, 20);

    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.shapes()[0].kind, ShapeKind::Line);
}

#[test]
fn preview_geometry_exists_only_for_release_time_tools() {
    let mut state = create_test_state();
    state.set_tool(Tool::Square);
    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_motion(50, 30);

    let (topology, vertices, color) = state.provisional_geometry().expect("square previews");
    assert_eq!(topology, Topology::LineStrip);
    assert_eq!(vertices, shape::square_vertices(viewport(), 10, 10, 50, 30));
    assert_eq!(color, RED);

    state.on_mouse_release(MouseButton::Left, 50, 30);
    assert!(state.provisional_geometry().is_none());

    state.set_tool(Tool::Pen);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(5, 5);
    assert!(state.provisional_geometry().is_none());
}

#[test]
fn render_replays_committed_shapes_and_live_preview() {
    let mut state = create_test_state();
    state.set_tool(Tool::Line);

    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_release(MouseButton::Left, 10, 10);

    state.on_mouse_press(MouseButton::Left, 20, 20);
    state.on_mouse_motion(40, 40);

    let mut surface = RecordingSurface::new();
    state.render(&mut surface);

    // One committed line plus the live preview.
    assert_eq!(surface.clears, vec![WHITE]);
    assert_eq!(surface.calls.len(), 2);
    assert!(!state.needs_redraw);
}

#[test]
fn clear_canvas_then_render_issues_zero_primitives() {
    let mut state = create_test_state();
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(10, 10);
    state.on_mouse_release(MouseButton::Left, 10, 10);
    assert!(!state.store.is_empty());

    state.clear_canvas();

    let mut surface = RecordingSurface::new();
    state.render(&mut surface);
    assert!(surface.calls.is_empty());
    assert_eq!(surface.clears, vec![WHITE]);
}

#[test]
fn render_is_idempotent_between_commits() {
    let mut state = create_test_state();
    state.set_tool(Tool::Rect);
    state.on_mouse_press(MouseButton::Left, 5, 5);
    state.on_mouse_release(MouseButton::Left, 50, 70);

    let mut surface = RecordingSurface::new();
    state.render(&mut surface);
    let first_pass = surface.calls.clone();

    state.render(&mut surface);
    assert_eq!(surface.calls, first_pass);
}

#[test]
fn set_color_spec_keeps_current_color_on_malformed_input() {
    let mut state = create_test_state();
    assert_eq!(state.current_color, RED);

    state.set_color_spec("zzz");
    assert_eq!(state.current_color, RED);

    state.set_color_spec("#0000FF");
    assert_eq!(state.current_color, BLUE);

    state.set_color_spec("not-a-color");
    assert_eq!(state.current_color, BLUE);
}

#[test]
fn shape_limit_drops_commits_beyond_max() {
    let mut state =
        SketchState::with_defaults(Viewport::new(100, 100), RED, WHITE, Tool::Line, 1);

    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_release(MouseButton::Left, 10, 10);
    state.on_mouse_press(MouseButton::Left, 20, 20);
    state.on_mouse_release(MouseButton::Left, 30, 30);

    assert_eq!(state.store.len(), 1);
}

#[test]
fn undo_removes_the_most_recent_shape() {
    let mut state = create_test_state();
    state.set_tool(Tool::Line);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_release(MouseButton::Left, 10, 10);

    assert!(state.undo());
    assert!(state.store.is_empty());
    assert!(!state.undo());
}
