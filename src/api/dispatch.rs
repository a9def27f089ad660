use tracing::warn;

use crate::core::{ChartItem, ItemKind, annotate_points};
use crate::extensions::{ItemStrategies, LineSeries};
use crate::render::{DrawingOp, LineStyle};

/// Routes one item to the strategy registered for its kind.
///
/// `items` is the full list in series order; only the moment-points
/// strategy receives it. Unknown kinds draw nothing.
pub fn render_item(
    item: &dyn ChartItem,
    items: &[&dyn ChartItem],
    index: usize,
    strategies: &ItemStrategies,
) -> Option<DrawingOp> {
    match item.kind() {
        ItemKind::Line => {
            let series = LineSeries {
                index,
                name: item.name().to_owned(),
                units: item.units().to_owned(),
                points: annotate_points(item),
                style: LineStyle::uniform(item.color()),
            };
            Some(strategies.line().draw_line(series))
        }
        ItemKind::MomentLines => Some(strategies.moment_lines().draw_moment_lines(item, index)),
        ItemKind::MomentPoints => Some(
            strategies
                .moment_points()
                .draw_moment_points(item, items, index),
        ),
        ItemKind::Other(tag) => {
            warn!(
                index,
                name = item.name(),
                kind = %tag,
                "skipping chart item with unrecognized type"
            );
            None
        }
    }
}

/// Dispatches every item in series order, dropping items that draw nothing.
pub fn render_items<I: ChartItem>(items: &[I], strategies: &ItemStrategies) -> Vec<DrawingOp> {
    let all: Vec<&dyn ChartItem> = items.iter().map(|item| item as &dyn ChartItem).collect();
    all.iter()
        .enumerate()
        .filter_map(|(index, item)| render_item(*item, &all, index, strategies))
        .collect()
}
