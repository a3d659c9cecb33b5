pub mod axis;
pub mod bounds;
pub mod line_plot;
pub mod primitives;
pub mod transform;
pub mod types;

pub use axis::{Axis, AxisId, AxisPosition, TickValues};
pub use bounds::{BoundsAccumulator, BoundsConstraint, DataBounds, VERTICAL_PADDING_RATIO};
pub use line_plot::{LinePlot, PlotItem, PlotKind};
pub use transform::{Transform2D, TransformCache};
pub use types::{DataPoint, ScreenPoint, Viewport};
