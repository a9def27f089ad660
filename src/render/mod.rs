mod null_renderer;
mod ops;
mod primitives;
mod surface;

pub use null_renderer::NullRenderer;
pub use ops::{
    AxisPlacement, DrawingOp, LegendBlock, LegendOrientation, LineDrawing, LineStyle,
    MomentLinesDrawing, MomentMarker, MomentPoint, MomentPointsDrawing, XAxisDrawing,
    YAxisDrawing, YAxisDrawings,
};
pub use primitives::{Color, TextHAlign};
pub use surface::{ChartSurface, ComposedChart, EmptyPlaceholder};

use crate::error::ChartResult;

/// Contract implemented by the host drawing layer.
///
/// Backends receive a fully composed chart description so pixel production
/// stays isolated from axis grouping and item dispatch.
pub trait Renderer {
    fn render(&mut self, chart: &ComposedChart) -> ChartResult<()>;
}
