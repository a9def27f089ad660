use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;
use crate::render::Color;

/// Drawing-type tag of a chart item.
///
/// Unknown wire tags are preserved in `Other` so dispatch can skip them
/// instead of failing to parse the whole item list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    Line,
    MomentLines,
    MomentPoints,
    Other(String),
}

impl ItemKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Line => "line",
            Self::MomentLines => "momentLines",
            Self::MomentPoints => "momentPoints",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ItemKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "line" => Self::Line,
            "momentLines" => Self::MomentLines,
            "momentPoints" => Self::MomentPoints,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ItemKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_owned())
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sample of a chart item.
///
/// Moment items may omit `y`; `label` is a per-point annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y: Some(y),
            label: None,
        }
    }

    /// Point carrying only a time, used by moment items.
    #[must_use]
    pub fn moment(x: f64) -> Self {
        Self {
            x,
            y: None,
            label: None,
        }
    }

    #[must_use]
    pub fn at_time(time: DateTime<Utc>, value: f64) -> Self {
        Self::new(datetime_to_unix_seconds(time), value)
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(value, "value")?,
        ))
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Line point enriched with the owning series' units and name.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPoint {
    pub x: f64,
    pub y: Option<f64>,
    pub label: Option<String>,
    pub units: Rc<str>,
    pub name: Rc<str>,
}

/// Read-only view of one data series supplied by the host.
///
/// `color` must be a pure accessor: repeated calls on the same instance return
/// the same value within a render pass.
pub trait ChartItem {
    fn kind(&self) -> ItemKind;
    fn units(&self) -> &str;
    fn name(&self) -> &str;
    fn points(&self) -> &[SeriesPoint];
    fn color(&self) -> Color;
}

impl<T: ChartItem + ?Sized> ChartItem for &T {
    fn kind(&self) -> ItemKind {
        (**self).kind()
    }
    fn units(&self) -> &str {
        (**self).units()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn points(&self) -> &[SeriesPoint] {
        (**self).points()
    }
    fn color(&self) -> Color {
        (**self).color()
    }
}

impl<T: ChartItem + ?Sized> ChartItem for Box<T> {
    fn kind(&self) -> ItemKind {
        (**self).kind()
    }
    fn units(&self) -> &str {
        (**self).units()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn points(&self) -> &[SeriesPoint] {
        (**self).points()
    }
    fn color(&self) -> Color {
        (**self).color()
    }
}

impl<T: ChartItem + ?Sized> ChartItem for Rc<T> {
    fn kind(&self) -> ItemKind {
        (**self).kind()
    }
    fn units(&self) -> &str {
        (**self).units()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn points(&self) -> &[SeriesPoint] {
        (**self).points()
    }
    fn color(&self) -> Color {
        (**self).color()
    }
}

/// Plain chart item for hosts without their own series type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub units: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<SeriesPoint>,
    pub color: Color,
}

impl SeriesItem {
    #[must_use]
    pub fn new(
        kind: impl Into<ItemKind>,
        units: impl Into<String>,
        name: impl Into<String>,
        color: Color,
    ) -> Self {
        Self {
            kind: kind.into(),
            units: units.into(),
            name: name.into(),
            points: Vec::new(),
            color,
        }
    }

    #[must_use]
    pub fn line(units: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self::new(ItemKind::Line, units, name, color)
    }

    #[must_use]
    pub fn moment_lines(units: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self::new(ItemKind::MomentLines, units, name, color)
    }

    #[must_use]
    pub fn moment_points(units: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self::new(ItemKind::MomentPoints, units, name, color)
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<SeriesPoint>) -> Self {
        self.points = points;
        self
    }
}

impl ChartItem for SeriesItem {
    fn kind(&self) -> ItemKind {
        self.kind.clone()
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// Enriches the points of `item` with its units and name.
///
/// Points with a non-finite time are dropped; a non-finite value becomes a
/// gap (`y: None`).
#[must_use]
pub fn annotate_points(item: &dyn ChartItem) -> Vec<AnnotatedPoint> {
    let units: Rc<str> = Rc::from(item.units());
    let name: Rc<str> = Rc::from(item.name());
    item.points()
        .iter()
        .filter(|point| point.x.is_finite())
        .map(|point| AnnotatedPoint {
            x: point.x,
            y: point.y.filter(|value| value.is_finite()),
            label: point.label.clone(),
            units: Rc::clone(&units),
            name: Rc::clone(&name),
        })
        .collect()
}
