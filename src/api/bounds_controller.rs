use tracing::debug;

use crate::core::{BoundsAccumulator, DataBounds};

use super::{ChartTimeSeries, SceneHost};

impl<H: SceneHost> ChartTimeSeries<H> {
    /// Declares the limit rectangle and snaps both axes onto it.
    ///
    /// Exact repeats of the current rectangle are ignored. Otherwise the
    /// horizontal axis takes `[x_min, x_max]`, the vertical axis takes
    /// `[y_min, y_max]`, the chart bounds become valid and the plots
    /// transform is invalidated.
    pub fn set_bounds(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
        let bounds = DataBounds::new(x_min, x_max, y_min, y_max);
        if self.constraint.bounds == bounds {
            return;
        }

        self.constraint.bounds = bounds;
        self.x_axis.set_range(x_min, x_max);
        self.y_axis.set_range(y_min, y_max);
        self.chart_bounds_valid = true;
        self.transform.invalidate();
        self.host.set_dirty(true);
        debug!(x_min, x_max, y_min, y_max, "chart bounds committed");
    }

    /// Limit rectangle as `(x_min, x_max, y_min, y_max)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.constraint.bounds.as_tuple()
    }

    pub fn set_bounds_enabled(&mut self, enabled: bool) {
        self.constraint.enabled = enabled;
    }

    #[must_use]
    pub fn bounds_enabled(&self) -> bool {
        self.constraint.enabled
    }

    /// Fits the bounds on every visible plot and commits them through
    /// [`set_bounds`](Self::set_bounds).
    ///
    /// The horizontal range fits the data exactly; the vertical range gets
    /// 5% of its span as headroom on both sides. Without any visible plot the
    /// bounds fall back to `(0, 0, 0, 0)`.
    pub fn recalculate_bounds(&mut self) {
        self.update();

        let mut acc = BoundsAccumulator::default();
        for plot in self.plots.iter().filter(|plot| plot.is_visible()) {
            acc.include(plot.bounds());
        }
        let contributions = acc.contributions();
        let fitted = acc.finish().with_vertical_padding();
        debug!(contributions, ?fitted, "chart bounds recalculated");

        self.set_bounds(fitted.x_min, fitted.x_max, fitted.y_min, fitted.y_max);
        self.chart_bounds_valid = true;
    }

    #[must_use]
    pub fn is_chart_bounds_valid(&self) -> bool {
        self.chart_bounds_valid
    }
}
