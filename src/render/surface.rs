use crate::api::{ChartDomain, ChartTheme};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingOp, LegendBlock, XAxisDrawing, YAxisDrawings};

/// Backend-agnostic description of one composed chart.
///
/// Fields are listed in stacking order: legend, X axis, Y axes, then item
/// drawings in series order (later items over earlier ones).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurface {
    pub width: f64,
    pub height: f64,
    pub domain: Option<ChartDomain>,
    pub theme: ChartTheme,
    pub container: Option<serde_json::Value>,
    pub legend: LegendBlock,
    pub x_axis: XAxisDrawing,
    pub y_axes: YAxisDrawings,
    pub items: Vec<DrawingOp>,
}

impl ChartSurface {
    pub fn validate(&self) -> ChartResult<()> {
        validate_size(self.width, self.height)?;

        for entry in &self.legend.entries {
            entry.color.validate()?;
            entry.label_color.validate()?;
        }
        for axis in &self.y_axes {
            axis.color.validate()?;
            if !axis.offset_px.is_finite() {
                return Err(ChartError::InvalidData(
                    "y axis offset must be finite".to_owned(),
                ));
            }
        }
        for op in &self.items {
            op.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items
            .iter()
            .filter(|op| matches!(op, DrawingOp::Line(_)))
            .count()
    }
}

/// Stand-in drawn instead of a chart whose items carry no points.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyPlaceholder {
    pub width: f64,
    pub height: f64,
    pub message: String,
}

/// Output of one composition pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposedChart {
    Chart(ChartSurface),
    Empty(EmptyPlaceholder),
}

impl ComposedChart {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Chart(surface) => surface.validate(),
            Self::Empty(placeholder) => validate_size(placeholder.width, placeholder.height),
        }
    }

    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ChartSurface> {
        match self {
            Self::Chart(surface) => Some(surface),
            Self::Empty(_) => None,
        }
    }
}

fn validate_size(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidSize { width, height });
    }
    Ok(())
}
