//! Public chart element and the controllers behind its operations.
//!
//! `ChartTimeSeries` is split across files by concern: plot collection,
//! bounds, layout, interaction and the paint pipeline each add one `impl`
//! block on the same type.

mod bounds_controller;
mod chart;
mod config;
mod host;
mod interaction_controller;
mod layout;
mod paint_pipeline;
mod plot_collection;

pub use chart::{ChartTimeSeries, NUMBER_OF_AXES};
pub use config::{Borders, ChartTimeSeriesConfig};
pub use host::{HeadlessScene, SceneHost};
pub use layout::LayoutManager;
pub use plot_collection::PlotCollection;
