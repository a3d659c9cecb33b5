//! chart-timeseries: interactive 2-D time-series chart element.
//!
//! The crate keeps the view engine (axis ranges, cached data-to-screen
//! transform, bounded pan/zoom, layered redraw) separate from the host scene
//! and the drawing backend, which are reached only through narrow traits.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartTimeSeries, ChartTimeSeriesConfig};
pub use error::{ChartError, ChartResult};
