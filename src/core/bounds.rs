use serde::{Deserialize, Serialize};

/// Vertical headroom added on each side of the fitted value range, as a
/// fraction of the observed span.
pub const VERTICAL_PADDING_RATIO: f64 = 1.0 / 20.0;

/// Axis-aligned rectangle in data space, ordered as `(x_min, x_max, y_min, y_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub const fn as_tuple(self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }

    /// Lower limit of one dimension: `0` is horizontal, `1` is vertical.
    #[must_use]
    pub fn lower(self, dimension: usize) -> f64 {
        if dimension == 0 { self.x_min } else { self.y_min }
    }

    /// Upper limit of one dimension: `0` is horizontal, `1` is vertical.
    #[must_use]
    pub fn upper(self, dimension: usize) -> f64 {
        if dimension == 0 { self.x_max } else { self.y_max }
    }

    /// Expands the vertical range by [`VERTICAL_PADDING_RATIO`] of its span
    /// on both sides. The horizontal range is left exact.
    #[must_use]
    pub fn with_vertical_padding(self) -> Self {
        let pad = (self.y_max - self.y_min) * VERTICAL_PADDING_RATIO;
        Self {
            y_min: self.y_min - pad,
            y_max: self.y_max + pad,
            ..self
        }
    }
}

impl From<(f64, f64, f64, f64)> for DataBounds {
    fn from(value: (f64, f64, f64, f64)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

/// Running min/max fold over plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsAccumulator {
    folded: DataBounds,
    contributions: usize,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self {
            folded: DataBounds::new(
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
            ),
            contributions: 0,
        }
    }
}

impl BoundsAccumulator {
    pub fn include(&mut self, bounds: DataBounds) {
        self.folded.x_min = self.folded.x_min.min(bounds.x_min);
        self.folded.x_max = self.folded.x_max.max(bounds.x_max);
        self.folded.y_min = self.folded.y_min.min(bounds.y_min);
        self.folded.y_max = self.folded.y_max.max(bounds.y_max);
        self.contributions += 1;
    }

    #[must_use]
    pub fn contributions(&self) -> usize {
        self.contributions
    }

    /// Folded bounds, or the degenerate `(0, 0, 0, 0)` when nothing was included.
    #[must_use]
    pub fn finish(self) -> DataBounds {
        if self.contributions == 0 {
            return DataBounds::default();
        }
        self.folded
    }
}

/// Optional outer limit for interactive axis-range changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundsConstraint {
    pub enabled: bool,
    pub bounds: DataBounds,
}

impl BoundsConstraint {
    /// Limits of one dimension when the constraint is enabled.
    #[must_use]
    pub fn limits(&self, dimension: usize) -> Option<(f64, f64)> {
        self.enabled
            .then(|| (self.bounds.lower(dimension), self.bounds.upper(dimension)))
    }
}
