use serde::{Deserialize, Serialize};

use crate::core::DataBounds;
use crate::interaction::ZoomMode;

/// Insets in pixels between the scene edges and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub top: i32,
}

impl Borders {
    #[must_use]
    pub const fn new(left: i32, bottom: i32, right: i32, top: i32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

impl Default for Borders {
    fn default() -> Self {
        Self::new(60, 50, 20, 20)
    }
}

/// Construction-time settings for [`ChartTimeSeries`](super::ChartTimeSeries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTimeSeriesConfig {
    pub borders: Borders,
    pub interaction_enabled: bool,
    pub zoom_mode: ZoomMode,
    pub bounds_enabled: bool,
    pub bounds: DataBounds,
    pub show_legend: bool,
    pub title: Option<String>,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl Default for ChartTimeSeriesConfig {
    fn default() -> Self {
        Self {
            borders: Borders::default(),
            interaction_enabled: true,
            zoom_mode: ZoomMode::Both,
            bounds_enabled: false,
            bounds: DataBounds::default(),
            show_legend: true,
            title: None,
            x_axis_title: "X Axis".to_owned(),
            y_axis_title: "Y Axis".to_owned(),
        }
    }
}

impl ChartTimeSeriesConfig {
    #[must_use]
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn with_interaction_enabled(mut self, enabled: bool) -> Self {
        self.interaction_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_zoom_mode(mut self, mode: ZoomMode) -> Self {
        self.zoom_mode = mode;
        self
    }

    /// Sets the limit rectangle and enables it.
    #[must_use]
    pub fn with_bounds(mut self, bounds: DataBounds) -> Self {
        self.bounds = bounds;
        self.bounds_enabled = true;
        self
    }

    #[must_use]
    pub fn with_show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_axis_title = x_title.into();
        self.y_axis_title = y_title.into();
        self
    }
}
