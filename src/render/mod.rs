mod color_series;
mod grid;
mod layer_stack;
mod legend;
mod primitives;
mod recording_device;

pub use color_series::{ColorGenerator, ColorScheme, ColorSeries};
pub use grid::PlotGrid;
pub use layer_stack::ChartLayerKind;
pub use legend::{ChartLegend, Legend, LegendEntry};
pub use primitives::{ClipRect, Color, LinePrimitive, Pen, TextHAlign, TextPrimitive};
pub use recording_device::{DrawCommand, RecordingDevice};

use crate::core::{DataPoint, Transform2D};

/// Drawing contract consumed by the chart during `paint`.
///
/// Coordinates are in device space, transformed by the current matrix stack.
/// Implementations own clipping and text shaping; the chart only decides
/// what is drawn and in which order.
pub trait PaintDevice {
    /// Marks the start of one chart layer. Backends may ignore it.
    fn begin_layer(&mut self, _layer: ChartLayerKind) {}

    fn set_clipping(&mut self, clip: ClipRect);
    fn disable_clipping(&mut self);

    fn push_matrix(&mut self);
    /// Right-multiplies the current matrix by `transform`.
    fn append_transform(&mut self, transform: Transform2D);
    fn pop_matrix(&mut self);

    fn set_pen(&mut self, color: Color, width: f64);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn draw_polyline(&mut self, points: &[DataPoint]);
    fn draw_text(&mut self, text: TextPrimitive);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoPaintDevice, CairoPaintStats};
