//! timeline-chart: multi-series timeline chart composition.
//!
//! Items are grouped onto one value axis per measurement unit, every item
//! gets a legend row, and each item is drawn by the strategy registered for
//! its kind. Pixel production stays behind the [`render::Renderer`] trait;
//! the chart width follows its container through [`api::ResponsiveWidth`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ResponsiveChart, compose_chart};
pub use error::{ChartError, ChartResult};
