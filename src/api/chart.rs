use tracing::{debug, warn};

use crate::core::{Axis, AxisId, AxisPosition, BoundsConstraint, TransformCache};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::{ColorGenerator, Legend, PlotGrid};

use super::{ChartTimeSeriesConfig, LayoutManager, PlotCollection, SceneHost};

/// Number of axes of a time-series chart (left and bottom).
pub const NUMBER_OF_AXES: usize = 2;

/// Time-series chart element embedded in a host scene.
///
/// `ChartTimeSeries` owns its two axes, the plot items, the optional legend
/// and color generator, the bounds constraint and the cached plots transform.
/// The host drives it once per frame through [`update`](Self::update) and
/// [`paint`](Self::paint) and forwards pointer/wheel events to the
/// interaction handlers.
pub struct ChartTimeSeries<H: SceneHost> {
    pub(super) host: H,
    pub(super) x_axis: Axis,
    pub(super) y_axis: Axis,
    pub(super) grid: PlotGrid,
    pub(super) plots: PlotCollection,
    pub(super) constraint: BoundsConstraint,
    pub(super) transform: TransformCache,
    pub(super) layout: LayoutManager,
    pub(super) interaction: InteractionState,
    pub(super) legend: Option<Box<dyn Legend>>,
    pub(super) show_legend: bool,
    pub(super) colors: Option<Box<dyn ColorGenerator>>,
    pub(super) title: Option<String>,
    pub(super) chart_bounds_valid: bool,
}

impl<H: SceneHost> ChartTimeSeries<H> {
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, ChartTimeSeriesConfig::default())
    }

    #[must_use]
    pub fn with_config(host: H, config: ChartTimeSeriesConfig) -> Self {
        let mut x_axis = Axis::new(AxisPosition::Bottom);
        x_axis.set_title(config.x_axis_title.clone());
        let mut y_axis = Axis::new(AxisPosition::Left);
        y_axis.set_title(config.y_axis_title.clone());

        let mut chart = Self {
            host,
            x_axis,
            y_axis,
            grid: PlotGrid::default(),
            plots: PlotCollection::default(),
            constraint: BoundsConstraint::default(),
            transform: TransformCache::default(),
            layout: LayoutManager::new(config.borders),
            interaction: InteractionState::new(config.interaction_enabled, config.zoom_mode),
            legend: None,
            show_legend: config.show_legend,
            colors: None,
            title: config.title.clone(),
            chart_bounds_valid: true,
        };

        let bounds = config.bounds;
        chart.set_bounds(bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max);
        chart.set_bounds_enabled(config.bounds_enabled);
        debug!(?config, "time-series chart created");
        chart
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Axis by index: `0` is the left (vertical) axis, `1` the bottom
    /// (horizontal) axis.
    pub fn get_axis(&self, index: usize) -> ChartResult<&Axis> {
        let id = Self::axis_id(index)?;
        Ok(self.axis(id))
    }

    pub fn get_axis_mut(&mut self, index: usize) -> ChartResult<&mut Axis> {
        let id = Self::axis_id(index)?;
        Ok(self.axis_mut(id))
    }

    #[must_use]
    pub fn axis(&self, id: AxisId) -> &Axis {
        match id {
            AxisId::Left => &self.y_axis,
            AxisId::Bottom => &self.x_axis,
        }
    }

    /// Direct axis access. Range changes made here do not invalidate the
    /// plots transform; use [`set_axis_range`](Self::set_axis_range) for that.
    pub fn axis_mut(&mut self, id: AxisId) -> &mut Axis {
        match id {
            AxisId::Left => &mut self.y_axis,
            AxisId::Bottom => &mut self.x_axis,
        }
    }

    /// Sets one axis range without touching the bounds constraint.
    pub fn set_axis_range(&mut self, id: AxisId, minimum: f64, maximum: f64) {
        self.axis_mut(id).set_range(minimum, maximum);
        self.transform.invalidate();
        self.host.set_dirty(true);
    }

    #[must_use]
    pub fn number_of_axes(&self) -> usize {
        NUMBER_OF_AXES
    }

    /// Installs `legend`, releasing any previous one.
    pub fn set_legend(&mut self, mut legend: Box<dyn Legend>) {
        legend.on_attach();
        legend.set_anchor(self.layout.point2());
        self.legend = Some(legend);
        self.host.set_dirty(true);
    }

    #[must_use]
    pub fn legend(&self) -> Option<&dyn Legend> {
        self.legend.as_deref()
    }

    /// Detaches and returns the legend.
    pub fn take_legend(&mut self) -> Option<Box<dyn Legend>> {
        let legend = self.legend.take();
        if legend.is_some() {
            self.host.set_dirty(true);
        }
        legend
    }

    pub fn set_show_legend(&mut self, show: bool) {
        if self.show_legend != show {
            self.show_legend = show;
            self.host.set_dirty(true);
        }
    }

    #[must_use]
    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    /// Installs the color generator used by later `add_plot` calls,
    /// releasing any previous one. Existing plots keep their colors.
    pub fn set_color_series(&mut self, colors: Box<dyn ColorGenerator>) {
        self.colors = Some(colors);
        self.host.set_dirty(true);
    }

    #[must_use]
    pub fn color_series(&self) -> Option<&dyn ColorGenerator> {
        self.colors.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        if self.title != title {
            self.title = title;
            self.host.set_dirty(true);
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn grid_mut(&mut self) -> &mut PlotGrid {
        &mut self.grid
    }

    fn axis_id(index: usize) -> ChartResult<AxisId> {
        AxisId::from_index(index).ok_or_else(|| {
            warn!(index, "only two axes are available with this chart: LEFT and BOTTOM");
            ChartError::UnsupportedAxis { index }
        })
    }
}
