use thiserror::Error;

use crate::core::PlotKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported plot kind `{kind:?}`: only line plots are supported by this chart")]
    UnsupportedPlotKind { kind: PlotKind },

    #[error("plot index {index} exceeds the number of plots ({len})")]
    PlotIndexOutOfRange { index: usize, len: usize },

    #[error("unsupported axis index {index}: only LEFT (0) and BOTTOM (1) are available")]
    UnsupportedAxis { index: usize },
}
