use tracing::debug;

use crate::api::ChartConfig;
use crate::api::dispatch::render_items;
use crate::core::{ChartItem, derive_axes, derive_legends, has_no_points};
use crate::extensions::{ChartOverrides, ItemStrategies};
use crate::render::{ChartSurface, ComposedChart, EmptyPlaceholder, YAxisDrawings};

/// Composes one chart pass at `width`.
///
/// Returns `None` without an X axis, an empty-state placeholder when no item
/// carries points, and the full surface otherwise. Axes, legends and item
/// drawings are derived fresh from `items` on every call.
pub fn compose_chart<I: ChartItem>(
    width: f64,
    config: &ChartConfig,
    items: &[I],
    strategies: &ItemStrategies,
    overrides: &ChartOverrides,
) -> Option<ComposedChart> {
    let Some(x_axis_spec) = config.x_axis.as_ref() else {
        debug!(items = items.len(), "no x axis configured, skipping chart");
        return None;
    };

    if has_no_points(items) {
        debug!(
            items = items.len(),
            height = config.height,
            "no data points, composing empty state"
        );
        return Some(ComposedChart::Empty(EmptyPlaceholder {
            width,
            height: config.height,
            message: config.empty_message.clone(),
        }));
    }

    let axes = derive_axes(items);
    let legend = overrides
        .legend()
        .render_legend(derive_legends(items), width);
    let x_axis = overrides.x_axis().render_x_axis(x_axis_spec);
    let y_axes: YAxisDrawings = axes
        .iter()
        .enumerate()
        .map(|(index, axis)| overrides.y_axis().render_y_axis(axis, index, axes.len()))
        .collect();
    let drawings = render_items(items, strategies);

    debug!(
        width,
        items = items.len(),
        axes = y_axes.len(),
        drawings = drawings.len(),
        "composed chart"
    );

    Some(ComposedChart::Chart(ChartSurface {
        width,
        height: config.height,
        domain: config.domain,
        theme: config.theme.clone(),
        container: config.container.clone(),
        legend,
        x_axis,
        y_axes,
        items: drawings,
    }))
}
