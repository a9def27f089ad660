use std::fmt;

use crate::api::XAxisSpec;
use crate::core::{AxisDescriptor, LegendEntry};
use crate::render::{
    AxisPlacement, LegendBlock, LegendOrientation, TextHAlign, XAxisDrawing, YAxisDrawing,
};

/// Outward shift applied per stacked pair of Y axes.
pub const DEFAULT_AXIS_OFFSET_PX: f64 = 40.0;

pub trait LegendRenderer {
    fn render_legend(&self, entries: Vec<LegendEntry>, width: f64) -> LegendBlock;
}

pub trait XAxisRenderer {
    fn render_x_axis(&self, spec: &XAxisSpec) -> XAxisDrawing;
}

/// Renders one Y axis; `index` and `axis_count` let the renderer place
/// axes left or right and stack them.
pub trait YAxisRenderer {
    fn render_y_axis(&self, axis: &AxisDescriptor, index: usize, axis_count: usize)
    -> YAxisDrawing;
}

impl<F> LegendRenderer for F
where
    F: Fn(Vec<LegendEntry>, f64) -> LegendBlock,
{
    fn render_legend(&self, entries: Vec<LegendEntry>, width: f64) -> LegendBlock {
        self(entries, width)
    }
}

impl<F> XAxisRenderer for F
where
    F: Fn(&XAxisSpec) -> XAxisDrawing,
{
    fn render_x_axis(&self, spec: &XAxisSpec) -> XAxisDrawing {
        self(spec)
    }
}

impl<F> YAxisRenderer for F
where
    F: Fn(&AxisDescriptor, usize, usize) -> YAxisDrawing,
{
    fn render_y_axis(
        &self,
        axis: &AxisDescriptor,
        index: usize,
        axis_count: usize,
    ) -> YAxisDrawing {
        self(axis, index, axis_count)
    }
}

/// Horizontal legend spanning the container width, title centered.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLegendRenderer;

impl LegendRenderer for DefaultLegendRenderer {
    fn render_legend(&self, entries: Vec<LegendEntry>, width: f64) -> LegendBlock {
        LegendBlock {
            entries,
            orientation: LegendOrientation::Horizontal,
            title: None,
            title_h_align: TextHAlign::Center,
            width,
        }
    }
}

/// Independent time axis labeled by its units.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultXAxisRenderer;

impl XAxisRenderer for DefaultXAxisRenderer {
    fn render_x_axis(&self, spec: &XAxisSpec) -> XAxisDrawing {
        XAxisDrawing {
            label: spec.units.clone(),
            scale: spec.scale,
            dependent: false,
        }
    }
}

/// Dependent axis labeled by units, alternating left and right.
///
/// Axis 0 sits left, axis 1 right, then each further pair is pushed
/// outward by [`DEFAULT_AXIS_OFFSET_PX`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultYAxisRenderer;

impl YAxisRenderer for DefaultYAxisRenderer {
    fn render_y_axis(
        &self,
        axis: &AxisDescriptor,
        index: usize,
        axis_count: usize,
    ) -> YAxisDrawing {
        let placement = if index % 2 == 0 {
            AxisPlacement::Left
        } else {
            AxisPlacement::Right
        };
        YAxisDrawing {
            label: axis.units.clone(),
            color: axis.color,
            dependent: true,
            placement,
            offset_px: (index / 2) as f64 * DEFAULT_AXIS_OFFSET_PX,
            index,
            axis_count,
        }
    }
}

/// Host-replaceable composition steps.
pub struct ChartOverrides {
    legend: Box<dyn LegendRenderer>,
    x_axis: Box<dyn XAxisRenderer>,
    y_axis: Box<dyn YAxisRenderer>,
}

impl Default for ChartOverrides {
    fn default() -> Self {
        Self {
            legend: Box::new(DefaultLegendRenderer),
            x_axis: Box::new(DefaultXAxisRenderer),
            y_axis: Box::new(DefaultYAxisRenderer),
        }
    }
}

impl fmt::Debug for ChartOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartOverrides").finish_non_exhaustive()
    }
}

impl ChartOverrides {
    #[must_use]
    pub fn with_legend_renderer(mut self, renderer: impl LegendRenderer + 'static) -> Self {
        self.legend = Box::new(renderer);
        self
    }

    #[must_use]
    pub fn with_x_axis_renderer(mut self, renderer: impl XAxisRenderer + 'static) -> Self {
        self.x_axis = Box::new(renderer);
        self
    }

    #[must_use]
    pub fn with_y_axis_renderer(mut self, renderer: impl YAxisRenderer + 'static) -> Self {
        self.y_axis = Box::new(renderer);
        self
    }

    #[must_use]
    pub fn legend(&self) -> &dyn LegendRenderer {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn x_axis(&self) -> &dyn XAxisRenderer {
        self.x_axis.as_ref()
    }

    #[must_use]
    pub fn y_axis(&self) -> &dyn YAxisRenderer {
        self.y_axis.as_ref()
    }
}
