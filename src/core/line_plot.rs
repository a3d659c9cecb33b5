use serde::{Deserialize, Serialize};

use crate::core::{BoundsAccumulator, DataBounds, DataPoint};
use crate::render::{Color, PaintDevice};

/// Plot kinds a caller may request. Only [`PlotKind::Line`] is supported by
/// the time-series chart; the others are rejected at `add_plot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotKind {
    Line,
    Points,
    Bar,
}

/// Capability set the chart needs from one plotted series.
///
/// `paint` draws in data space: the chart has already pushed the data-to-screen
/// transform and the plot-area clip on the device.
pub trait PlotItem {
    fn kind(&self) -> PlotKind;

    /// Refreshes internal caches (bounds) from the current data.
    fn update(&mut self);
    fn paint(&self, device: &mut dyn PaintDevice);
    /// Data bounds as of the last `update`.
    fn bounds(&self) -> DataBounds;

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);

    fn points(&self) -> &[DataPoint];
    fn set_data(&mut self, points: Vec<DataPoint>);
}

/// Polyline series over time-ordered samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    points: Vec<DataPoint>,
    cached_bounds: DataBounds,
    visible: bool,
    color: Color,
    width: f64,
    label: String,
}

impl LinePlot {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            points: Vec::new(),
            cached_bounds: DataBounds::default(),
            visible: true,
            color,
            width: 1.0,
            label: String::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.width = width;
        }
    }
}

impl PlotItem for LinePlot {
    fn kind(&self) -> PlotKind {
        PlotKind::Line
    }

    fn update(&mut self) {
        let mut acc = BoundsAccumulator::default();
        for point in &self.points {
            if point.x.is_finite() && point.y.is_finite() {
                acc.include(DataBounds::new(point.x, point.x, point.y, point.y));
            }
        }
        self.cached_bounds = acc.finish();
    }

    fn paint(&self, device: &mut dyn PaintDevice) {
        if !self.visible || self.points.len() < 2 {
            return;
        }
        device.set_pen(self.color, self.width);
        device.draw_polyline(&self.points);
    }

    fn bounds(&self) -> DataBounds {
        self.cached_bounds
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn points(&self) -> &[DataPoint] {
        &self.points
    }

    fn set_data(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }
}
