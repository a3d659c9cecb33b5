use tracing::trace;

use crate::core::{ScreenPoint, Transform2D};
use crate::render::{ChartLayerKind, ClipRect, Color, PaintDevice, TextHAlign, TextPrimitive};

use super::{ChartTimeSeries, SceneHost};

const TITLE_FONT_SIZE_PX: f64 = 14.0;

impl<H: SceneHost> ChartTimeSeries<H> {
    /// Refreshes the non-graphical state of plots and legend.
    pub fn update(&mut self) {
        self.plots.update_all();
        if self.show_legend {
            if let Some(legend) = self.legend.as_mut() {
                legend.update(&self.plots.legend_entries());
            }
        }
    }

    /// Paints the chart into `device`.
    ///
    /// Runs the lazy passes (layout, bounds, transform, ticks) and then draws
    /// grid, clipped plots, axes, legend and title in that order. Returns
    /// `false` without touching any state when the host scene is empty.
    pub fn paint(&mut self, device: &mut dyn PaintDevice) -> bool {
        let scene_size = self.host.scene_size();
        if !scene_size.is_valid() {
            trace!(
                width = scene_size.width,
                height = scene_size.height,
                "skip paint: empty scene"
            );
            return false;
        }

        self.update();
        self.layout_pass(scene_size);
        if !self.chart_bounds_valid {
            self.recalculate_bounds();
        }
        if !self.transform.is_valid() {
            self.recalculate_plots_transform();
        }
        self.x_axis.update();
        self.y_axis.update();

        device.begin_layer(ChartLayerKind::Grid);
        self.grid.paint(device, &self.x_axis, &self.y_axis);

        device.begin_layer(ChartLayerKind::Plots);
        device.set_clipping(self.plot_clip_rect());
        device.push_matrix();
        device.append_transform(self.transform.matrix());
        self.plots.paint_all(device);
        device.pop_matrix();
        device.disable_clipping();

        device.begin_layer(ChartLayerKind::Axes);
        device.set_pen(Color::BLACK, 1.0);
        self.x_axis.paint(device);
        self.y_axis.paint(device);

        if self.show_legend {
            if let Some(legend) = self.legend.as_ref() {
                device.begin_layer(ChartLayerKind::Legend);
                legend.paint(device);
            }
        }

        if let Some(title) = self.title.as_deref().filter(|title| !title.is_empty()) {
            device.begin_layer(ChartLayerKind::Title);
            let (point1, point2) = (self.layout.point1(), self.layout.point2());
            device.draw_text(TextPrimitive::new(
                title,
                (point1.x + point2.x) / 2.0,
                point2.y + 4.0,
                TITLE_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }

        true
    }

    /// Rebuilds the data-to-screen transform from the current axes.
    ///
    /// Returns `false` (and keeps the previous matrix) when either axis has a
    /// zero-width range.
    pub fn recalculate_plots_transform(&mut self) -> bool {
        self.transform
            .recompute(self.layout.point1(), &self.x_axis, &self.y_axis)
    }

    #[must_use]
    pub fn plots_transform(&self) -> Transform2D {
        self.transform.matrix()
    }

    #[must_use]
    pub fn is_plots_transform_valid(&self) -> bool {
        self.transform.is_valid()
    }

    /// Plot-area clip in device pixels, mapped through the inverse of the
    /// scene transform when the host has one.
    fn plot_clip_rect(&self) -> ClipRect {
        let (mut low, mut high) = (self.layout.point1(), self.layout.point2());
        if let Some(inverse) = self
            .host
            .scene_transform()
            .and_then(|transform| transform.inverse())
        {
            let (x1, y1) = inverse.map_xy(low.x, low.y);
            let (x2, y2) = inverse.map_xy(high.x, high.y);
            low = ScreenPoint::new(x1.min(x2), y1.min(y2));
            high = ScreenPoint::new(x1.max(x2), y1.max(y2));
        }
        ClipRect::new(
            low.x as i32,
            low.y as i32,
            (high.x - low.x) as i32,
            (high.y - low.y) as i32,
        )
    }
}
