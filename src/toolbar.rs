use crate::brush::Brush;
use crate::color::Color;

pub const WINDOW_WIDTH: u32 = 950;
pub const WINDOW_HEIGHT: u32 = 600;

/// Pointer-downs left of this column belong to the toolbar even when they
/// miss every button, and never start a stroke.
pub const CANVAS_LEFT_EDGE: i32 = 74;

/// Size change applied per click on the size buttons.
pub const SIZE_STEP: f32 = 0.5;

const SWATCH_COLS: i32 = 12;
const SWATCH_SIZE: i32 = 32;
const SWATCH_SPACING: i32 = 2;
const SWATCH_ORIGIN: (i32, i32) = (364, 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(self, point: (i32, i32)) -> bool {
        point.0 >= self.x
            && point.0 < self.x + self.w
            && point.1 >= self.y
            && point.1 < self.y + self.h
    }
}

/// One toolbar click resolves to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    AdjustSize(f32),
    SelectColor(Color),
    SelectEraser,
    Save,
}

/// Clickable and decorative toolbar regions, built once from static
/// geometry. All actionable rects are pairwise disjoint; hit-test priority
/// never has to disambiguate overlapping regions.
#[derive(Debug, Clone)]
pub struct MenuLayout {
    pub brush_icon: Rect,
    pub eraser: Rect,
    pub size_up: Rect,
    pub size_down: Rect,
    pub preview: Rect,
    pub swatches: Vec<Rect>,
    pub save: Rect,
}

impl MenuLayout {
    pub fn build(swatch_count: usize) -> Self {
        let swatches = (0..swatch_count as i32)
            .map(|i| {
                Rect::new(
                    SWATCH_ORIGIN.0 + (i % SWATCH_COLS) * (SWATCH_SIZE + SWATCH_SPACING),
                    SWATCH_ORIGIN.1 + (i / SWATCH_COLS) * (SWATCH_SIZE + SWATCH_SPACING),
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                )
            })
            .collect();

        Self {
            brush_icon: Rect::new(10, 10, 64, 64),
            eraser: Rect::new(104, 10, 64, 64),
            size_up: Rect::new(198, 20, 32, 32),
            size_down: Rect::new(198, 52, 32, 32),
            preview: Rect::new(260, 10, 64, 64),
            swatches,
            save: Rect::new(830, 10, 64, 64),
        }
    }
}

pub struct Menu {
    layout: MenuLayout,
    palette: Vec<Color>,
    background: Color,
}

impl Menu {
    pub fn new(palette: Vec<Color>, background: Color) -> Self {
        Self {
            layout: MenuLayout::build(palette.len()),
            palette,
            background,
        }
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Resolve a pointer-down to the action under it. Tested in order: size
    /// buttons, palette swatches, eraser, save.
    pub fn action_at(&self, point: (i32, i32)) -> Option<MenuAction> {
        if self.layout.size_up.contains(point) {
            return Some(MenuAction::AdjustSize(SIZE_STEP));
        }
        if self.layout.size_down.contains(point) {
            return Some(MenuAction::AdjustSize(-SIZE_STEP));
        }
        for (rect, color) in self.layout.swatches.iter().zip(&self.palette) {
            if rect.contains(point) {
                return Some(MenuAction::SelectColor(*color));
            }
        }
        if self.layout.eraser.contains(point) {
            return Some(MenuAction::SelectEraser);
        }
        if self.layout.save.contains(point) {
            return Some(MenuAction::Save);
        }
        None
    }

    /// Apply a brush-mutating action. `Save` carries no brush mutation; the
    /// shell routes it to the exporter.
    pub fn apply(&self, action: MenuAction, brush: &mut Brush) {
        match action {
            MenuAction::AdjustSize(delta) => brush.set_size(brush.size() + delta),
            MenuAction::SelectColor(color) => brush.set_color(color),
            MenuAction::SelectEraser => brush.set_color(self.background),
            MenuAction::Save => {}
        }
    }
}
