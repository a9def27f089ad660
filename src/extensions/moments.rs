use ordered_float::OrderedFloat;

use crate::core::primitives::lerp_at;
use crate::core::{ChartItem, ItemKind, SeriesPoint};
use crate::render::{MomentMarker, MomentPoint};

/// Vertical markers for every point with a finite time.
#[must_use]
pub fn place_moment_markers(points: &[SeriesPoint]) -> Vec<MomentMarker> {
    points
        .iter()
        .filter(|point| point.x.is_finite())
        .map(|point| MomentMarker {
            x: point.x,
            label: point.label.clone(),
        })
        .collect()
}

/// Resolves the vertical position of each moment point of `item`.
///
/// A point keeps its own `y` when it has one. Otherwise it snaps onto the
/// first `line` sibling sharing `item`'s units, interpolated at the point's
/// time. Points with a non-finite time are dropped.
#[must_use]
pub fn resolve_moment_points(item: &dyn ChartItem, items: &[&dyn ChartItem]) -> Vec<MomentPoint> {
    let anchor = snap_anchor(item, items);

    item.points()
        .iter()
        .filter(|point| point.x.is_finite())
        .map(|point| {
            let own = point.y.filter(|value| value.is_finite());
            let snapped = match (own, anchor) {
                (None, Some(series)) => value_at(series.points(), point.x)
                    .map(|value| (value, series.name().to_owned())),
                _ => None,
            };
            let (y, anchor_name) = match snapped {
                Some((value, name)) => (Some(value), Some(name)),
                None => (own, None),
            };
            MomentPoint {
                x: point.x,
                y,
                label: point.label.clone(),
                anchor: anchor_name,
            }
        })
        .collect()
}

fn snap_anchor<'a>(item: &dyn ChartItem, items: &[&'a dyn ChartItem]) -> Option<&'a dyn ChartItem> {
    items.iter().copied().find(|candidate| {
        candidate.kind() == ItemKind::Line
            && candidate.units() == item.units()
            && candidate
                .points()
                .iter()
                .any(|point| sample(point).is_some())
    })
}

fn sample(point: &SeriesPoint) -> Option<(f64, f64)> {
    match point.y {
        Some(y) if point.x.is_finite() && y.is_finite() => Some((point.x, y)),
        _ => None,
    }
}

/// Series value at `x`, interpolated between the bracketing samples and
/// clamped to the nearest end sample outside the series' range.
#[must_use]
pub fn value_at(points: &[SeriesPoint], x: f64) -> Option<f64> {
    let left = points
        .iter()
        .filter_map(sample)
        .filter(|(time, _)| *time <= x)
        .max_by_key(|(time, _)| OrderedFloat(*time));
    let right = points
        .iter()
        .filter_map(sample)
        .filter(|(time, _)| *time >= x)
        .min_by_key(|(time, _)| OrderedFloat(*time));

    match (left, right) {
        (Some(left), Some(right)) => Some(lerp_at(x, left, right)),
        (Some((_, value)), None) | (None, Some((_, value))) => Some(value),
        (None, None) => None,
    }
}
