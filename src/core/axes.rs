use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::core::ChartItem;
use crate::render::Color;

/// Value axis shared by every item with the same units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub units: String,
    pub color: Color,
}

/// Groups items by units into one axis per distinct unit.
///
/// Axes keep first-seen order and take the color of the first item carrying
/// their unit. The result is recomputed from the current items on every pass
/// because item colors are live accessors.
pub fn derive_axes<I: ChartItem>(items: &[I]) -> Vec<AxisDescriptor> {
    let mut by_units: IndexMap<&str, Color> = IndexMap::with_capacity(items.len());
    for item in items {
        if let Entry::Vacant(slot) = by_units.entry(item.units()) {
            slot.insert(item.color());
        }
    }

    by_units
        .into_iter()
        .map(|(units, color)| AxisDescriptor {
            units: units.to_owned(),
            color,
        })
        .collect()
}

