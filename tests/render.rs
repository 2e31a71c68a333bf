use drawcmd::draw::{CairoCanvas, DrawingSurface, Paint};
use drawcmd::input::{History, InterpreterState};

fn canvas_state() -> InterpreterState<CairoCanvas> {
    let canvas = CairoCanvas::new(200, 200, "white").unwrap();
    InterpreterState::new(canvas, History::new())
}

#[test]
fn new_canvas_is_filled_with_background() {
    let mut canvas = CairoCanvas::new(50, 40, "white").unwrap();
    assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(49, 39), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(50, 0), None);
    assert_eq!(canvas.pixel(-1, 0), None);
}

#[test]
fn filled_circle_paints_its_center() {
    let mut state = canvas_state();
    assert!(state.submit("fcircle 100 100 50 red"));
    assert_eq!(state.surface.pixel(100, 100), Some([255, 0, 0, 255]));
    assert_eq!(state.surface.pixel(5, 5), Some([255, 255, 255, 255]));
}

#[test]
fn outlined_circle_leaves_its_center_unpainted() {
    let mut state = canvas_state();
    assert!(state.submit("circle 100 100 50 blue"));
    assert_eq!(state.surface.pixel(100, 100), Some([255, 255, 255, 255]));
    assert_eq!(state.surface.frame().len(), 1);
}

#[test]
fn filled_square_defaults_to_black() {
    let mut state = canvas_state();
    assert!(state.submit("fsquare 20 20 40"));
    assert_eq!(state.surface.pixel(40, 40), Some([0, 0, 0, 255]));
}

#[test]
fn background_change_keeps_existing_shapes() {
    let mut state = canvas_state();
    state.submit("frectangle 10 10 30 30 red");
    assert!(state.submit("background #0000ff"));

    assert_eq!(state.surface.pixel(150, 150), Some([0, 0, 255, 255]));
    assert_eq!(state.surface.pixel(20, 20), Some([255, 0, 0, 255]));
}

#[test]
fn unknown_colors_draw_nothing() {
    let mut state = canvas_state();
    assert!(state.submit("fsquare 20 20 40 notacolor"));
    assert_eq!(state.surface.pixel(40, 40), Some([255, 255, 255, 255]));

    state.surface.set_background("notacolor");
    assert_eq!(state.surface.frame().background, "white");
    assert_eq!(state.surface.pixel(150, 150), Some([255, 255, 255, 255]));
}

#[test]
fn invalid_line_leaves_pixels_untouched() {
    let mut state = canvas_state();
    assert!(!state.submit("ftriangle 0 0 199 0 100"));
    assert!(state.surface.frame().is_empty());
    assert_eq!(state.surface.pixel(100, 10), Some([255, 255, 255, 255]));
}

#[test]
fn filled_polygon_covers_interior() {
    let mut canvas = CairoCanvas::new(100, 100, "white").unwrap();
    canvas.polygon(
        &[(10, 10), (90, 10), (70, 60), (30, 60)],
        &Paint::shape("green", true, 2.0),
    );
    assert_eq!(canvas.pixel(50, 30), Some([0, 128, 0, 255]));
}

#[test]
fn far_off_canvas_shapes_render_without_panicking() {
    let mut state = canvas_state();
    assert!(state.submit("circle 2000000000 0 1"));
    assert!(state.submit("frectangle 2147483000 0 1000 10"));
    assert!(state.submit("square -2147483648 0 -1"));

    assert_eq!(state.surface.frame().len(), 3);
    assert_eq!(state.surface.pixel(0, 0), Some([255, 255, 255, 255]));
}
