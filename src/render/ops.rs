use smallvec::SmallVec;

use crate::api::AxisScale;
use crate::core::{AnnotatedPoint, LegendEntry};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, TextHAlign};

/// Stroke and label colors bound to one line series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub stroke: Color,
    pub label_color: Color,
}

impl LineStyle {
    #[must_use]
    pub fn uniform(color: Color) -> Self {
        Self {
            stroke: color,
            label_color: color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineDrawing {
    pub key: String,
    pub points: Vec<AnnotatedPoint>,
    pub style: LineStyle,
}

/// Vertical marker at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentMarker {
    pub x: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentLinesDrawing {
    pub key: String,
    pub name: String,
    pub units: String,
    pub color: Color,
    pub markers: Vec<MomentMarker>,
}

/// Discrete moment point with its resolved vertical position.
///
/// `anchor` names the series the point was snapped onto when it had no
/// value of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentPoint {
    pub x: f64,
    pub y: Option<f64>,
    pub label: Option<String>,
    pub anchor: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentPointsDrawing {
    pub key: String,
    pub name: String,
    pub units: String,
    pub color: Color,
    pub points: Vec<MomentPoint>,
}

/// Per-item drawing handed to the drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingOp {
    Line(LineDrawing),
    MomentLines(MomentLinesDrawing),
    MomentPoints(MomentPointsDrawing),
    /// Host-specific drawing emitted by an overriding strategy.
    Custom {
        key: String,
        kind: String,
        payload: serde_json::Value,
    },
}

impl DrawingOp {
    /// Reconciliation key, stable across passes for the same item index.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Line(line) => &line.key,
            Self::MomentLines(moments) => &moments.key,
            Self::MomentPoints(moments) => &moments.key,
            Self::Custom { key, .. } => key,
        }
    }

    #[must_use]
    pub fn item_key(index: usize) -> String {
        format!("item-{index}")
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => {
                line.style.stroke.validate()?;
                line.style.label_color.validate()?;
                for point in &line.points {
                    validate_coordinates(point.x, point.y, "line point")?;
                }
            }
            Self::MomentLines(moments) => {
                moments.color.validate()?;
                for marker in &moments.markers {
                    validate_coordinates(marker.x, None, "moment marker")?;
                }
            }
            Self::MomentPoints(moments) => {
                moments.color.validate()?;
                for point in &moments.points {
                    validate_coordinates(point.x, point.y, "moment point")?;
                }
            }
            Self::Custom { kind, .. } => {
                if kind.is_empty() {
                    return Err(ChartError::InvalidData(
                        "custom drawing kind must not be empty".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn validate_coordinates(x: f64, y: Option<f64>, what: &str) -> ChartResult<()> {
    if !x.is_finite() || y.is_some_and(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendBlock {
    pub entries: Vec<LegendEntry>,
    pub orientation: LegendOrientation,
    pub title: Option<String>,
    pub title_h_align: TextHAlign,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XAxisDrawing {
    pub label: String,
    pub scale: AxisScale,
    /// Independent axes carry the time dimension.
    pub dependent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPlacement {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YAxisDrawing {
    pub label: String,
    pub color: Color,
    pub dependent: bool,
    pub placement: AxisPlacement,
    /// Outward shift from the plot edge for stacked axes on the same side.
    pub offset_px: f64,
    pub index: usize,
    pub axis_count: usize,
}

pub type YAxisDrawings = SmallVec<[YAxisDrawing; 4]>;
