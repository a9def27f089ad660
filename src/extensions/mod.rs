//! Pluggable drawing strategies and composition overrides.
//!
//! Every default here can be replaced by the host without touching the
//! dispatch or composition code in `api`.

pub mod moments;
pub mod overrides;
pub mod strategies;

pub use moments::{place_moment_markers, resolve_moment_points, value_at};
pub use overrides::{
    ChartOverrides, DEFAULT_AXIS_OFFSET_PX, DefaultLegendRenderer, DefaultXAxisRenderer,
    DefaultYAxisRenderer, LegendRenderer, XAxisRenderer, YAxisRenderer,
};
pub use strategies::{
    DefaultLineStrategy, DefaultMomentLinesStrategy, DefaultMomentPointsStrategy, ItemStrategies,
    LineSeries, LineStrategy, MomentLinesStrategy, MomentPointsStrategy,
};
