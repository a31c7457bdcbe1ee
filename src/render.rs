use crate::brush::Brush;
use crate::canvas::PixelCanvas;
use crate::color::Color;
use crate::icons::{icon_bitmap, ToolbarIcon};
use crate::toolbar::{Menu, Rect};

const BUTTON_FACE: Color = Color::rgb(0xe8, 0xe8, 0xe8);
const ICON_INK: Color = Color::rgb(0x20, 0x20, 0x20);
const GLYPH_MARGIN: i32 = 8;

/// Compose one presentation frame: the persistent canvas with the toolbar
/// and the live brush preview overlaid. The canvas itself is never written.
pub fn compose_frame(frame: &mut PixelCanvas, canvas: &PixelCanvas, menu: &Menu, brush: &Brush) {
    frame.copy_from(canvas);
    render_menu(frame, menu, brush);
}

pub fn render_menu(frame: &mut PixelCanvas, menu: &Menu, brush: &Brush) {
    let layout = menu.layout();

    blit_button(frame, layout.brush_icon, ToolbarIcon::Brush);
    blit_button(frame, layout.eraser, ToolbarIcon::Eraser);
    blit_button(frame, layout.size_up, ToolbarIcon::SizeUp);
    blit_button(frame, layout.size_down, ToolbarIcon::SizeDown);
    blit_button(frame, layout.save, ToolbarIcon::Save);

    for (rect, color) in layout.swatches.iter().zip(menu.palette()) {
        frame.fill_rect(rect.x, rect.y, rect.w, rect.h, *color);
    }

    render_preview(frame, layout.preview, menu.background(), brush);
}

/// The live preview swatch: an outlined box holding a filled circle with the
/// brush's current color and radius.
fn render_preview(frame: &mut PixelCanvas, preview: Rect, background: Color, brush: &Brush) {
    frame.fill_rect(preview.x, preview.y, preview.w, preview.h, background);
    frame.outline_rect(preview.x, preview.y, preview.w, preview.h, ICON_INK);

    let center = (preview.x + preview.w / 2, preview.y + preview.h / 2);
    frame.fill_circle(center, brush.size().round() as i32, brush.color());
}

fn blit_button(frame: &mut PixelCanvas, rect: Rect, icon: ToolbarIcon) {
    frame.fill_rect(rect.x, rect.y, rect.w, rect.h, BUTTON_FACE);
    frame.outline_rect(rect.x, rect.y, rect.w, rect.h, ICON_INK);

    let rows = icon_bitmap(icon);
    let glyph_h = rows.len() as i32;
    let glyph_w = rows[0].len() as i32;
    let scale = ((rect.w - GLYPH_MARGIN) / glyph_w)
        .min((rect.h - GLYPH_MARGIN) / glyph_h)
        .max(1);
    let origin_x = rect.x + (rect.w - glyph_w * scale) / 2;
    let origin_y = rect.y + (rect.h - glyph_h * scale) / 2;

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, bit) in row.bytes().enumerate() {
            if bit == b'1' {
                frame.fill_rect(
                    origin_x + col_idx as i32 * scale,
                    origin_y + row_idx as i32 * scale,
                    scale,
                    scale,
                    ICON_INK,
                );
            }
        }
    }
}
