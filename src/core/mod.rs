pub mod axes;
pub mod item;
pub mod legend;
pub mod primitives;
pub mod width;

pub use axes::{AxisDescriptor, derive_axes};
pub use item::{AnnotatedPoint, ChartItem, ItemKind, SeriesItem, SeriesPoint, annotate_points};
pub use legend::{LEGEND_LABEL_COLOR, LegendEntry, SwatchShape, derive_legends};
pub use width::{MIN_CHART_WIDTH, effective_chart_width};

/// True when no item has a single point, including the zero-item case.
pub fn has_no_points<I: ChartItem>(items: &[I]) -> bool {
    items.iter().all(|item| item.points().is_empty())
}
