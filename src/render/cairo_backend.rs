use cairo::Context;
use pango::FontDescription;

use crate::core::{DataPoint, Transform2D};
use crate::error::{ChartError, ChartResult};
use crate::render::{ClipRect, Color, PaintDevice, Pen, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango paint device drawing into an external context (for example
/// an image surface or a toolkit draw callback).
///
/// Chart coordinates grow upwards from the bottom-left corner while Cairo
/// grows downwards, so every vertical coordinate is flipped against
/// `surface_height` after the chart matrix stack is applied. Cairo errors are
/// latched and reported by [`CairoPaintDevice::finish`].
pub struct CairoPaintDevice<'a> {
    context: &'a Context,
    surface_height: f64,
    matrix_stack: Vec<Transform2D>,
    current: Transform2D,
    pen: Pen,
    stats: CairoPaintStats,
    first_error: Option<ChartError>,
}

impl<'a> CairoPaintDevice<'a> {
    #[must_use]
    pub fn new(context: &'a Context, surface_height: f64) -> Self {
        Self {
            context,
            surface_height,
            matrix_stack: Vec::new(),
            current: Transform2D::identity(),
            pen: Pen::default(),
            stats: CairoPaintStats::default(),
            first_error: None,
        }
    }

    /// Consumes the device, returning draw counts or the first Cairo error.
    pub fn finish(self) -> ChartResult<CairoPaintStats> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(self.stats),
        }
    }

    fn to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let (x, y) = self.current.map_xy(x, y);
        (x, self.surface_height - y)
    }

    fn stroke(&mut self, what: &str) {
        apply_color(self.context, self.pen.color);
        self.context.set_line_width(self.pen.width);
        if let Err(err) = self.context.stroke() {
            self.latch(what, err);
        }
    }

    fn latch(&mut self, prefix: &str, err: cairo::Error) {
        if self.first_error.is_none() {
            self.first_error = Some(map_backend_error(prefix, err));
        }
    }
}

impl PaintDevice for CairoPaintDevice<'_> {
    fn set_clipping(&mut self, clip: ClipRect) {
        self.context.reset_clip();
        let top = self.surface_height - f64::from(clip.y + clip.height);
        self.context.rectangle(
            f64::from(clip.x),
            top,
            f64::from(clip.width),
            f64::from(clip.height),
        );
        self.context.clip();
    }

    fn disable_clipping(&mut self) {
        self.context.reset_clip();
    }

    fn push_matrix(&mut self) {
        self.matrix_stack.push(self.current);
    }

    fn append_transform(&mut self, transform: Transform2D) {
        self.current = self.current.then_apply(transform);
    }

    fn pop_matrix(&mut self) {
        self.current = self.matrix_stack.pop().unwrap_or_default();
    }

    fn set_pen(&mut self, color: Color, width: f64) {
        self.pen = Pen { color, width };
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, y1) = self.to_device(x1, y1);
        let (x2, y2) = self.to_device(x2, y2);
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.stroke("failed to stroke line");
        self.stats.lines_drawn += 1;
    }

    fn draw_polyline(&mut self, points: &[DataPoint]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let (x, y) = self.to_device(first.x, first.y);
        self.context.move_to(x, y);
        for point in rest {
            let (x, y) = self.to_device(point.x, point.y);
            self.context.line_to(x, y);
        }
        self.stroke("failed to stroke polyline");
        self.stats.polylines_drawn += 1;
    }

    fn draw_text(&mut self, text: TextPrimitive) {
        let layout = pangocairo::functions::create_layout(self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let (x, y) = self.to_device(text.x, text.y);
        let x = match text.h_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };

        apply_color(self.context, text.color);
        // `text.y` is the bottom of the glyph box in chart space.
        self.context.move_to(x, y - f64::from(text_height));
        pangocairo::functions::show_layout(self.context, &layout);
        self.stats.texts_drawn += 1;
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
