use tracing::{debug, warn};

use crate::core::{LinePlot, PlotItem, PlotKind};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LegendEntry, PaintDevice};

use super::{ChartTimeSeries, SceneHost};

/// Ordered, exclusively owned plot items. Index = insertion order.
#[derive(Default)]
pub struct PlotCollection {
    items: Vec<Box<dyn PlotItem>>,
}

impl PlotCollection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: Box<dyn PlotItem>) -> &mut dyn PlotItem {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.items[last].as_mut()
    }

    /// Removes and returns the item at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn PlotItem>> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn PlotItem> {
        self.items.get(index).map(|item| item.as_ref() as &dyn PlotItem)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn PlotItem> {
        match self.items.get_mut(index) {
            Some(item) => Some(item.as_mut()),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PlotItem> {
        self.items.iter().map(|item| item.as_ref() as &dyn PlotItem)
    }

    pub fn update_all(&mut self) {
        for item in &mut self.items {
            item.update();
        }
    }

    pub fn paint_all(&self, device: &mut dyn PaintDevice) {
        for item in &self.items {
            item.paint(device);
        }
    }

    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.items
            .iter()
            .map(|item| LegendEntry {
                label: item.label().to_owned(),
                color: item.color(),
                visible: item.is_visible(),
            })
            .collect()
    }
}

impl<H: SceneHost> ChartTimeSeries<H> {
    /// Adds an empty plot of `kind`. Only [`PlotKind::Line`] is supported.
    ///
    /// The plot takes the next color of the attached color generator (black
    /// without one) and draws against the chart's two axes. Chart bounds are
    /// recalculated on the next paint.
    pub fn add_plot(&mut self, kind: PlotKind) -> ChartResult<&mut dyn PlotItem> {
        if kind != PlotKind::Line {
            warn!(?kind, "only the plot kind Line is supported by this chart");
            return Err(ChartError::UnsupportedPlotKind { kind });
        }

        let color = self
            .colors
            .as_ref()
            .map_or(Color::BLACK, |colors| colors.color_repeating(self.plots.len()));
        self.chart_bounds_valid = false;
        self.host.set_dirty(true);
        debug!(index = self.plots.len(), ?kind, "plot added");
        Ok(self.plots.push(Box::new(LinePlot::new(color))))
    }

    /// Removes the plot at `index`. Returns `false` when `index` is out of range.
    pub fn remove_plot(&mut self, index: usize) -> bool {
        if self.plots.remove(index).is_none() {
            return false;
        }
        self.chart_bounds_valid = false;
        self.host.set_dirty(true);
        debug!(index, remaining = self.plots.len(), "plot removed");
        true
    }

    pub fn clear_plots(&mut self) {
        let removed = self.plots.len();
        self.plots.clear();
        self.chart_bounds_valid = false;
        self.host.set_dirty(true);
        debug!(removed, "plots cleared");
    }

    pub fn get_plot(&self, index: usize) -> ChartResult<&dyn PlotItem> {
        let len = self.plots.len();
        self.plots.get(index).ok_or_else(|| {
            warn!(index, len, "plot index exceeds the number of plots");
            ChartError::PlotIndexOutOfRange { index, len }
        })
    }

    pub fn get_plot_mut(&mut self, index: usize) -> ChartResult<&mut dyn PlotItem> {
        let len = self.plots.len();
        self.plots.get_mut(index).ok_or_else(|| {
            warn!(index, len, "plot index exceeds the number of plots");
            ChartError::PlotIndexOutOfRange { index, len }
        })
    }

    #[must_use]
    pub fn number_of_plots(&self) -> usize {
        self.plots.len()
    }

    pub fn plots(&self) -> impl Iterator<Item = &dyn PlotItem> {
        self.plots.iter()
    }
}
