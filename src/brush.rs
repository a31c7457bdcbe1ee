use crate::canvas::PixelCanvas;
use crate::color::Color;

pub const MIN_SIZE: f32 = 0.5;
pub const MAX_SIZE: f32 = 32.0;

/// Freehand brush. A stroke is active while `stroke` holds the last pointer
/// position, so the position is valid exactly as long as drawing is.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    color: Color,
    size: f32,
    stroke: Option<(f32, f32)>,
}

impl Brush {
    pub fn new(color: Color, size: f32) -> Self {
        let mut brush = Self {
            color,
            size: MIN_SIZE,
            stroke: None,
        };
        brush.set_size(size);
        brush
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.stroke
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    pub fn start_draw(&mut self, pos: (f32, f32)) {
        self.stroke = Some(pos);
    }

    pub fn end_draw(&mut self) {
        self.stroke = None;
    }

    /// Paint the segment from the last position to `pos` as a run of filled
    /// circles, then advance the stroke. No-op unless a stroke is active.
    pub fn draw(&mut self, canvas: &mut PixelCanvas, pos: (f32, f32)) {
        let Some(last) = self.stroke else {
            return;
        };
        let radius = self.size.round() as i32;
        for point in stroke_points(last, pos) {
            canvas.fill_circle(point, radius, self.color);
        }
        self.stroke = Some(pos);
    }
}

/// Sample the segment `from → to` at unit-length steps, rounded to whole
/// pixels with consecutive duplicates dropped. Pointer-move events arrive at
/// input rate, so stamping only the sampled positions leaves gaps on fast
/// strokes; unit spacing keeps consecutive stamps touching.
pub fn stroke_points(from: (f32, f32), to: (f32, f32)) -> Vec<(i32, i32)> {
    let round = |p: (f32, f32)| (p.0.round() as i32, p.1.round() as i32);

    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        // Zero-length segment: the step vector would divide by zero.
        return vec![round(to)];
    }

    let steps = length as usize;
    let mut points: Vec<(i32, i32)> = Vec::with_capacity(steps + 2);
    for step in 0..=steps {
        let t = step as f32 / length;
        let point = round((from.0 + dx * t, from.1 + dy * t));
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    let end = round(to);
    if points.last() != Some(&end) {
        points.push(end);
    }
    points
}
