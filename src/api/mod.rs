mod chart_config;
mod compose;
mod dispatch;
mod responsive;
mod responsive_chart;

pub use chart_config::{
    AxisScale, ChartConfig, ChartDomain, ChartTheme, DEFAULT_CHART_HEIGHT, DEFAULT_EMPTY_MESSAGE,
    XAxisSpec,
};
pub use compose::compose_chart;
pub use dispatch::{render_item, render_items};
pub use responsive::{ListenerId, MeasuredElement, ResizeNotifier, ResponsiveWidth, WidthProps};
pub use responsive_chart::{RenderOutcome, ResponsiveChart};
