use super::*;
use crate::draw::{Color, Shape, color::*};
use crate::input::{PointerButton, Tool};

fn editor() -> Editor {
    Editor::new(64, 64, WHITE).expect("surface")
}

fn rgb(editor: &mut Editor) -> Vec<u8> {
    editor.surface_mut().to_rgb().expect("pixels")
}

fn px(editor: &mut Editor, x: i32, y: i32) -> Color {
    editor.surface_mut().pixel(x, y).expect("pixel")
}

fn assert_color_close(actual: Color, expected: Color) {
    let close = (actual.r - expected.r).abs() < 0.02
        && (actual.g - expected.g).abs() < 0.02
        && (actual.b - expected.b).abs() < 0.02;
    assert!(close, "expected {expected:?}, got {actual:?}");
}

#[test]
fn motion_before_any_press_is_a_no_op() {
    let mut editor = editor();
    let before = rgb(&mut editor);

    editor.on_pointer_motion(20, 20).unwrap();
    editor.on_pointer_motion(40, 40).unwrap();

    assert!(!editor.is_drawing());
    assert_eq!(rgb(&mut editor), before);
}

#[test]
fn press_starts_a_session_and_release_returns_to_idle() {
    let mut editor = editor();
    assert!(!editor.is_drawing());

    editor.on_pointer_press(PointerButton::Left, 10, 10).unwrap();
    assert!(editor.is_drawing());

    editor.on_pointer_motion(30, 30).unwrap();
    editor.on_pointer_release(PointerButton::Left, 30, 30);
    assert!(!editor.is_drawing());

    // Stray motion after commit must not repaint anything
    let committed = rgb(&mut editor);
    editor.on_pointer_motion(50, 50).unwrap();
    assert_eq!(rgb(&mut editor), committed);
}

#[test]
fn press_while_active_keeps_the_original_anchor() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);

    editor.on_pointer_press(PointerButton::Left, 5, 5).unwrap();
    editor.on_pointer_press(PointerButton::Left, 30, 30).unwrap();

    let shape = editor.preview_shape(40, 40).expect("active session");
    assert_eq!(
        shape,
        Shape::Rect {
            x: 5,
            y: 5,
            w: 35,
            h: 35,
            color: BLACK,
            thick: 5.0,
            filled: false,
        }
    );
}

#[test]
fn preview_tracks_pointer_without_accumulating() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);

    editor.on_pointer_press(PointerButton::Left, 10, 10).unwrap();
    editor.on_pointer_motion(40, 40).unwrap();
    let first = rgb(&mut editor);

    // Wander away and come back: the buffer must be snapshot + last preview,
    // not a pile-up of every intermediate rectangle
    editor.on_pointer_motion(60, 20).unwrap();
    editor.on_pointer_motion(40, 40).unwrap();

    assert_eq!(rgb(&mut editor), first);
}

#[test]
fn outline_rectangle_spans_drag_corners() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);

    editor.on_pointer_press(PointerButton::Left, 10, 10).unwrap();
    editor.on_pointer_motion(50, 40).unwrap();

    let shape = editor.preview_shape(50, 40).expect("active session");
    assert_eq!(
        shape,
        Shape::Rect {
            x: 10,
            y: 10,
            w: 40,
            h: 30,
            color: BLACK,
            thick: 5.0,
            filled: false,
        }
    );

    editor.on_pointer_release(PointerButton::Left, 50, 40);

    // Border is stroked, interior stays background
    assert_color_close(px(&mut editor, 30, 10), BLACK);
    assert_color_close(px(&mut editor, 30, 25), WHITE);
}

#[test]
fn filled_rectangle_paints_interior() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    editor.set_color(RED);
    editor.set_filled(true);

    editor.on_pointer_press(PointerButton::Left, 10, 10).unwrap();
    editor.on_pointer_motion(50, 40).unwrap();
    editor.on_pointer_release(PointerButton::Left, 50, 40);

    assert_color_close(px(&mut editor, 30, 25), RED);
}

#[test]
fn circle_radius_is_the_anchor_distance() {
    let mut editor = editor();
    editor.set_tool(Tool::Circle);
    editor.on_pointer_press(PointerButton::Left, 0, 0).unwrap();

    let Some(Shape::Circle { radius, cx, cy, .. }) = editor.preview_shape(3, 4) else {
        panic!("expected circle preview");
    };
    assert_eq!((cx, cy), (0, 0));
    assert_eq!(radius, 5.0);

    // Equal distances give equal radii regardless of direction
    let Some(Shape::Circle { radius: other, .. }) = editor.preview_shape(5, 0) else {
        panic!("expected circle preview");
    };
    assert_eq!(other, radius);
}

#[test]
fn triangle_mirrors_the_base_vertex_across_the_apex_column() {
    let mut editor = editor();
    editor.set_tool(Tool::Triangle);
    editor.set_color(RED);
    editor.set_filled(true);

    editor.on_pointer_press(PointerButton::Left, 32, 8).unwrap();
    editor.on_pointer_motion(44, 40).unwrap();

    let shape = editor.preview_shape(44, 40).expect("active session");
    assert_eq!(
        shape,
        Shape::Triangle {
            apex_x: 32,
            apex_y: 8,
            base_x: 44,
            base_y: 40,
            color: RED,
            thick: 5.0,
            filled: true,
        }
    );
    assert_eq!(crate::util::mirrored_base_x(32, 44), 20);

    editor.on_pointer_release(PointerButton::Left, 44, 40);

    // Interior is symmetric around the apex column; outside stays background
    assert_color_close(px(&mut editor, 26, 35), RED);
    assert_color_close(px(&mut editor, 38, 35), RED);
    assert_color_close(px(&mut editor, 10, 35), WHITE);
}

#[test]
fn eraser_doubles_width_and_paints_the_background() {
    let mut editor = editor();
    editor.set_thickness(6.0);

    // Lay down a brush stroke first
    editor.on_pointer_press(PointerButton::Left, 10, 30).unwrap();
    editor.on_pointer_motion(54, 30).unwrap();
    editor.on_pointer_release(PointerButton::Left, 54, 30);
    assert_color_close(px(&mut editor, 32, 30), BLACK);

    // Erase straight over it
    editor.set_tool(Tool::Eraser);
    editor.on_pointer_press(PointerButton::Left, 8, 30).unwrap();

    let Some(Shape::Stroke { color, thick, .. }) = editor.preview_shape(8, 30) else {
        panic!("expected stroke preview");
    };
    assert_eq!(thick, 6.0 * ERASER_WIDTH_FACTOR);
    assert_eq!(color, WHITE);

    editor.on_pointer_motion(56, 30).unwrap();
    editor.on_pointer_release(PointerButton::Left, 56, 30);

    assert_color_close(px(&mut editor, 32, 30), WHITE);
}

#[test]
fn style_changes_do_not_affect_the_active_session() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);

    editor.on_pointer_press(PointerButton::Left, 10, 10).unwrap();
    editor.set_color(RED);
    editor.set_thickness(9.0);
    editor.on_pointer_motion(40, 40).unwrap();

    let Some(Shape::Rect { color, thick, .. }) = editor.preview_shape(40, 40) else {
        panic!("expected rectangle preview");
    };
    assert_eq!(color, BLACK);
    assert_eq!(thick, 5.0);

    editor.on_pointer_release(PointerButton::Left, 40, 40);
    assert_color_close(px(&mut editor, 25, 10), BLACK);

    // The updated selection applies to the next session
    assert_eq!(editor.current_style().stroke, RED);
    assert_eq!(editor.current_style().width, 9.0);
}

#[test]
fn right_press_cancels_and_rewinds_the_preview() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    editor.set_filled(true);

    // Commit something so the rewind target is not a blank canvas
    editor.on_pointer_press(PointerButton::Left, 5, 5).unwrap();
    editor.on_pointer_motion(20, 20).unwrap();
    editor.on_pointer_release(PointerButton::Left, 20, 20);
    let committed = rgb(&mut editor);

    editor.on_pointer_press(PointerButton::Left, 30, 30).unwrap();
    editor.on_pointer_motion(60, 60).unwrap();
    editor.on_pointer_press(PointerButton::Right, 60, 60).unwrap();

    assert!(!editor.is_drawing());
    assert_eq!(rgb(&mut editor), committed);
}

#[test]
fn non_left_release_keeps_the_session_active() {
    let mut editor = editor();
    editor.on_pointer_press(PointerButton::Left, 10, 10).unwrap();

    editor.on_pointer_release(PointerButton::Middle, 10, 10);
    assert!(editor.is_drawing());

    editor.on_pointer_release(PointerButton::Left, 10, 10);
    assert!(!editor.is_drawing());
}

#[test]
fn clear_resets_the_canvas_and_drops_the_session() {
    let mut editor = editor();

    editor.on_pointer_press(PointerButton::Left, 10, 30).unwrap();
    editor.on_pointer_motion(50, 30).unwrap();
    editor.clear().unwrap();

    assert!(!editor.is_drawing());
    let rgb = rgb(&mut editor);
    assert!(rgb.chunks_exact(3).all(|px| px == [255, 255, 255]));
}
