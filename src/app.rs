use crate::brush::Brush;
use crate::canvas::PixelCanvas;
use crate::color::Color;
use crate::export;
use crate::palette;
use crate::render;
use crate::settings::{self, Settings};
use crate::toolbar::{Menu, MenuAction, CANVAS_LEFT_EDGE, WINDOW_HEIGHT, WINDOW_WIDTH};
use eframe::egui;
use std::time::Duration;

pub const BACKGROUND: Color = Color::WHITE;

const TICK: Duration = Duration::from_millis(33);

/// The whole application: every piece of mutable state is an owned field
/// here and is only touched from the event-loop thread.
pub struct PaintApp {
    pub settings: Settings,
    pub brush: Brush,
    pub menu: Menu,
    pub canvas: PixelCanvas,
    frame: PixelCanvas,
    texture: Option<egui::TextureHandle>,
    last_error: Option<String>,
}

impl PaintApp {
    pub fn new(settings: Settings) -> Self {
        let colors = if settings.randomize_palette {
            palette::random_palette(&mut rand::thread_rng())
        } else {
            palette::fixed_palette()
        };
        let brush = Brush::new(settings.brush_color, settings.brush_size);
        let canvas = PixelCanvas::new(WINDOW_WIDTH, WINDOW_HEIGHT, BACKGROUND);
        let frame = canvas.clone();

        Self {
            settings,
            brush,
            menu: Menu::new(colors, BACKGROUND),
            canvas,
            frame,
            texture: None,
            last_error: None,
        }
    }

    /// Route a pointer-down: the menu gets the first look, and only misses
    /// right of the toolbar column may start a stroke.
    pub fn pointer_down(&mut self, pos: (f32, f32)) {
        let point = (pos.0.round() as i32, pos.1.round() as i32);
        if let Some(action) = self.menu.action_at(point) {
            match action {
                MenuAction::Save => self.save_canvas(),
                action => self.menu.apply(action, &mut self.brush),
            }
        } else if point.0 >= CANVAS_LEFT_EDGE {
            // The leftmost column belongs to the toolbar even where no
            // button sits under the pointer; strokes never start there.
            self.brush.start_draw(pos);
        }
    }

    fn save_canvas(&mut self) {
        match export::export_canvas(&self.canvas) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "painting exported");
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!(?err, "painting export failed");
                self.last_error = Some(format!("save failed: {err:#}"));
            }
        }
    }

    fn upload_frame(&mut self, ctx: &egui::Context) {
        render::compose_frame(&mut self.frame, &self.canvas, &self.menu, &self.brush);
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [self.frame.width() as usize, self.frame.height() as usize],
            self.frame.pixels(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("frame", image, egui::TextureOptions::NEAREST))
            }
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.canvas.clear(BACKGROUND);
        }

        self.upload_frame(ctx);
        let Some(texture) = self.texture.clone() else {
            return;
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = ui.add(egui::Image::new(&texture).sense(egui::Sense::drag()));
                let to_canvas = |p: egui::Pos2| (p.x - response.rect.min.x, p.y - response.rect.min.y);

                if response.drag_started() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.pointer_down(to_canvas(pos));
                    }
                } else if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.brush.draw(&mut self.canvas, to_canvas(pos));
                    }
                }
                if response.drag_stopped() {
                    self.brush.end_draw();
                }
            });

        if let Some(error) = self.last_error.clone() {
            egui::Area::new(egui::Id::new("save-error"))
                .anchor(egui::Align2::LEFT_BOTTOM, [8.0, -8.0])
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::RED, error);
                });
        }

        ctx.request_repaint_after(TICK);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.brush_color = self.brush.color();
        self.settings.brush_size = self.brush.size();
        if let Err(err) = settings::save(&self.settings) {
            tracing::warn!(?err, "failed to persist settings on exit");
        }
    }
}
