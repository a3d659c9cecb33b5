use serde::{Deserialize, Serialize};

/// Paint layers of the chart, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Grid,
    Plots,
    Axes,
    Legend,
    Title,
}

impl ChartLayerKind {
    #[must_use]
    pub const fn canonical_order() -> [Self; 5] {
        [
            Self::Grid,
            Self::Plots,
            Self::Axes,
            Self::Legend,
            Self::Title,
        ]
    }
}
