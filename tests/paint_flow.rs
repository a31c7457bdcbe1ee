use artboard::app::PaintApp;
use artboard::color::Color;
use artboard::palette::PALETTE_LEN;
use artboard::settings::Settings;
use artboard::toolbar::{Rect, CANVAS_LEFT_EDGE};

fn new_app() -> PaintApp {
    PaintApp::new(Settings::default())
}

fn center(rect: Rect) -> (f32, f32) {
    ((rect.x + rect.w / 2) as f32, (rect.y + rect.h / 2) as f32)
}

#[test]
fn toolbar_click_mutates_the_brush_instead_of_starting_a_stroke() {
    let mut app = new_app();
    let swatch = app.menu.layout().swatches[3];
    let expected = app.menu.palette()[3];

    app.pointer_down(center(swatch));
    assert_eq!(app.brush.color(), expected);
    assert!(!app.brush.is_drawing());
}

#[test]
fn canvas_click_starts_a_stroke_and_dragging_paints() {
    let mut app = new_app();

    app.pointer_down((200.0, 300.0));
    assert!(app.brush.is_drawing());

    app.brush.draw(&mut app.canvas, (204.0, 300.0));
    assert_eq!(app.canvas.pixel(202, 300), Color::BLACK);
    assert_eq!(app.brush.last_position(), Some((204.0, 300.0)));

    app.brush.end_draw();
    assert!(!app.brush.is_drawing());
}

#[test]
fn clicks_left_of_the_toolbar_column_never_start_a_stroke() {
    let mut app = new_app();

    // No button sits at the bottom of the leftmost column, but the column
    // still belongs to the toolbar.
    let pos = (20.0, 500.0);
    assert!((pos.0 as i32) < CANVAS_LEFT_EDGE);
    assert_eq!(app.menu.action_at((20, 500)), None);

    app.pointer_down(pos);
    assert!(!app.brush.is_drawing());
}

#[test]
fn eraser_strokes_restore_the_background() {
    let mut app = new_app();

    app.pointer_down((400.0, 400.0));
    app.brush.draw(&mut app.canvas, (410.0, 400.0));
    app.brush.end_draw();
    assert_eq!(app.canvas.pixel(405, 400), Color::BLACK);

    let eraser = app.menu.layout().eraser;
    app.pointer_down(center(eraser));
    assert!(!app.brush.is_drawing());

    app.pointer_down((400.0, 400.0));
    app.brush.draw(&mut app.canvas, (410.0, 400.0));
    app.brush.end_draw();
    assert_eq!(app.canvas.pixel(405, 400), Color::WHITE);
}

#[test]
fn size_buttons_saturate_at_the_lower_bound() {
    let mut app = new_app();
    let size_down = center(app.menu.layout().size_down);

    for _ in 0..4 {
        app.pointer_down(size_down);
    }
    assert_eq!(app.brush.size(), 0.5);
}

#[test]
fn randomized_palette_keeps_the_swatch_grid_shape() {
    let settings = Settings {
        randomize_palette: true,
        ..Settings::default()
    };
    let app = PaintApp::new(settings);

    assert_eq!(app.menu.palette().len(), PALETTE_LEN);
    assert_eq!(app.menu.layout().swatches.len(), PALETTE_LEN);
}
