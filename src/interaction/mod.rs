//! Pointer/wheel interaction state and the pan/zoom range arithmetic.
//!
//! Dimensions are indexed `0` = horizontal (time), `1` = vertical (value).

use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

/// Fraction of the current span removed from each side per wheel step.
pub const ZOOM_STEP_RATIO: f64 = 0.05;

/// Axes affected by wheel zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomMode {
    #[default]
    Both,
    Horizontal,
    Vertical,
}

impl ZoomMode {
    #[must_use]
    pub fn applies_to(self, dimension: usize) -> bool {
        match self {
            Self::Both => true,
            Self::Horizontal => dimension == 0,
            Self::Vertical => dimension == 1,
        }
    }
}

/// Pointer event delivered by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MouseEvent {
    pub screen_pos: ScreenPoint,
    pub last_screen_pos: ScreenPoint,
}

impl MouseEvent {
    #[must_use]
    pub const fn new(screen_pos: ScreenPoint, last_screen_pos: ScreenPoint) -> Self {
        Self {
            screen_pos,
            last_screen_pos,
        }
    }

    /// Event at rest at `screen_pos` (no movement since the last one).
    #[must_use]
    pub const fn at(screen_pos: ScreenPoint) -> Self {
        Self::new(screen_pos, screen_pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    enabled: bool,
    zoom_mode: ZoomMode,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            enabled: true,
            zoom_mode: ZoomMode::Both,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(enabled: bool, zoom_mode: ZoomMode) -> Self {
        Self { enabled, zoom_mode }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn zoom_mode(self) -> ZoomMode {
        self.zoom_mode
    }

    pub fn set_zoom_mode(&mut self, mode: ZoomMode) {
        self.zoom_mode = mode;
    }
}

/// Axis range after dragging the pointer from `last_pos` to `pos`.
///
/// `screen_start`/`screen_end` are the axis endpoints along the dimension.
/// With `limits`, a pan crossing the lower limit snaps the minimum onto it and
/// keeps the pre-pan maximum (the upper limit is symmetric). Returns `None`
/// when the axis has no screen extent.
#[must_use]
pub fn pan_range(
    range: (f64, f64),
    screen_start: f64,
    screen_end: f64,
    last_pos: f64,
    pos: f64,
    limits: Option<(f64, f64)>,
) -> Option<(f64, f64)> {
    let screen_span = screen_end - screen_start;
    if screen_span == 0.0 {
        return None;
    }

    let (min, max) = range;
    let scale = (max - min) / screen_span;
    let delta = (last_pos - pos) * scale;
    let candidate = (min + delta, max + delta);

    let Some((lower, upper)) = limits else {
        return Some(candidate);
    };
    if candidate.0 < lower {
        Some((lower, max))
    } else if candidate.1 > upper {
        Some((min, upper))
    } else {
        Some(candidate)
    }
}

/// Axis range after `delta` wheel steps; positive steps zoom in.
///
/// With `limits`, each edge is clamped in place independently.
#[must_use]
pub fn zoom_range(range: (f64, f64), delta: f64, limits: Option<(f64, f64)>) -> (f64, f64) {
    let (min, max) = range;
    let frac = (max - min) * ZOOM_STEP_RATIO;
    let mut zoomed = (min + delta * frac, max - delta * frac);
    if let Some((lower, upper)) = limits {
        if zoomed.0 < lower {
            zoomed.0 = lower;
        }
        if zoomed.1 > upper {
            zoomed.1 = upper;
        }
    }
    zoomed
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ZoomMode, pan_range, zoom_range};

    #[test]
    fn zoom_mode_selects_dimensions() {
        assert!(ZoomMode::Both.applies_to(0) && ZoomMode::Both.applies_to(1));
        assert!(ZoomMode::Horizontal.applies_to(0) && !ZoomMode::Horizontal.applies_to(1));
        assert!(!ZoomMode::Vertical.applies_to(0) && ZoomMode::Vertical.applies_to(1));
    }

    #[test]
    fn pan_moves_window_opposite_to_pointer() {
        // 100 data units over 200 px: dragging 20 px right shows 10 units earlier.
        let (min, max) = pan_range((0.0, 100.0), 0.0, 200.0, 100.0, 120.0, None).expect("pan");
        assert_relative_eq!(min, -10.0);
        assert_relative_eq!(max, 90.0);
    }

    #[test]
    fn pan_past_lower_limit_reanchors_on_limit() {
        let (min, max) =
            pan_range((1.0, 9.0), 0.0, 80.0, 50.0, 80.0, Some((0.0, 10.0))).expect("pan");
        assert_eq!(min, 0.0);
        assert_eq!(max, 9.0);
    }

    #[test]
    fn pan_past_upper_limit_reanchors_on_limit() {
        let (min, max) =
            pan_range((1.0, 9.0), 0.0, 80.0, 80.0, 50.0, Some((0.0, 10.0))).expect("pan");
        assert_eq!(min, 1.0);
        assert_eq!(max, 10.0);
    }

    #[test]
    fn pan_without_screen_extent_is_skipped() {
        assert_eq!(pan_range((0.0, 1.0), 5.0, 5.0, 0.0, 1.0, None), None);
    }

    #[test]
    fn zoom_contracts_symmetrically() {
        assert_eq!(zoom_range((0.0, 100.0), 1.0, None), (5.0, 95.0));
        assert_eq!(zoom_range((0.0, 100.0), -1.0, None), (-5.0, 105.0));
    }

    #[test]
    fn zoom_out_clamps_each_edge_in_place() {
        let (min, max) = zoom_range((1.0, 101.0), -1.0, Some((0.0, 200.0)));
        assert_eq!(min, 0.0);
        assert_relative_eq!(max, 106.0);
    }
}
