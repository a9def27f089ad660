use std::fmt;

use crate::core::{AnnotatedPoint, ChartItem};
use crate::extensions::moments::{place_moment_markers, resolve_moment_points};
use crate::render::{DrawingOp, LineDrawing, LineStyle, MomentLinesDrawing, MomentPointsDrawing};

/// Styled, annotated point sequence of one `line` item.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub index: usize,
    pub name: String,
    pub units: String,
    pub points: Vec<AnnotatedPoint>,
    pub style: LineStyle,
}

/// Draws `line` items. A host override replaces it for every line item.
pub trait LineStrategy {
    fn draw_line(&self, series: LineSeries) -> DrawingOp;
}

/// Draws `momentLines` items from the item alone.
pub trait MomentLinesStrategy {
    fn draw_moment_lines(&self, item: &dyn ChartItem, index: usize) -> DrawingOp;
}

/// Draws `momentPoints` items.
///
/// This is the only strategy that sees the full item list, so points can be
/// positioned against sibling series. The default strategy snaps a point
/// without its own value onto the first `line` item with the same units;
/// lines with other units sit on a different axis and are never used, so
/// such a point stays unanchored.
pub trait MomentPointsStrategy {
    fn draw_moment_points(
        &self,
        item: &dyn ChartItem,
        items: &[&dyn ChartItem],
        index: usize,
    ) -> DrawingOp;
}

impl<F> LineStrategy for F
where
    F: Fn(LineSeries) -> DrawingOp,
{
    fn draw_line(&self, series: LineSeries) -> DrawingOp {
        self(series)
    }
}

impl<F> MomentLinesStrategy for F
where
    F: Fn(&dyn ChartItem, usize) -> DrawingOp,
{
    fn draw_moment_lines(&self, item: &dyn ChartItem, index: usize) -> DrawingOp {
        self(item, index)
    }
}

impl<F> MomentPointsStrategy for F
where
    F: Fn(&dyn ChartItem, &[&dyn ChartItem], usize) -> DrawingOp,
{
    fn draw_moment_points(
        &self,
        item: &dyn ChartItem,
        items: &[&dyn ChartItem],
        index: usize,
    ) -> DrawingOp {
        self(item, items, index)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLineStrategy;

impl LineStrategy for DefaultLineStrategy {
    fn draw_line(&self, series: LineSeries) -> DrawingOp {
        DrawingOp::Line(LineDrawing {
            key: DrawingOp::item_key(series.index),
            points: series.points,
            style: series.style,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMomentLinesStrategy;

impl MomentLinesStrategy for DefaultMomentLinesStrategy {
    fn draw_moment_lines(&self, item: &dyn ChartItem, index: usize) -> DrawingOp {
        DrawingOp::MomentLines(MomentLinesDrawing {
            key: DrawingOp::item_key(index),
            name: item.name().to_owned(),
            units: item.units().to_owned(),
            color: item.color(),
            markers: place_moment_markers(item.points()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMomentPointsStrategy;

impl MomentPointsStrategy for DefaultMomentPointsStrategy {
    fn draw_moment_points(
        &self,
        item: &dyn ChartItem,
        items: &[&dyn ChartItem],
        index: usize,
    ) -> DrawingOp {
        DrawingOp::MomentPoints(MomentPointsDrawing {
            key: DrawingOp::item_key(index),
            name: item.name().to_owned(),
            units: item.units().to_owned(),
            color: item.color(),
            points: resolve_moment_points(item, items),
        })
    }
}

/// Strategy table consulted by item dispatch, one entry per item kind.
pub struct ItemStrategies {
    line: Box<dyn LineStrategy>,
    moment_lines: Box<dyn MomentLinesStrategy>,
    moment_points: Box<dyn MomentPointsStrategy>,
}

impl Default for ItemStrategies {
    fn default() -> Self {
        Self {
            line: Box::new(DefaultLineStrategy),
            moment_lines: Box::new(DefaultMomentLinesStrategy),
            moment_points: Box::new(DefaultMomentPointsStrategy),
        }
    }
}

impl fmt::Debug for ItemStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStrategies").finish_non_exhaustive()
    }
}

impl ItemStrategies {
    #[must_use]
    pub fn with_line_strategy(mut self, strategy: impl LineStrategy + 'static) -> Self {
        self.line = Box::new(strategy);
        self
    }

    #[must_use]
    pub fn with_moment_lines_strategy(
        mut self,
        strategy: impl MomentLinesStrategy + 'static,
    ) -> Self {
        self.moment_lines = Box::new(strategy);
        self
    }

    #[must_use]
    pub fn with_moment_points_strategy(
        mut self,
        strategy: impl MomentPointsStrategy + 'static,
    ) -> Self {
        self.moment_points = Box::new(strategy);
        self
    }

    #[must_use]
    pub fn line(&self) -> &dyn LineStrategy {
        self.line.as_ref()
    }

    #[must_use]
    pub fn moment_lines(&self) -> &dyn MomentLinesStrategy {
        self.moment_lines.as_ref()
    }

    #[must_use]
    pub fn moment_points(&self) -> &dyn MomentPointsStrategy {
        self.moment_points.as_ref()
    }
}
