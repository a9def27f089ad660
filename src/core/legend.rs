use serde::{Deserialize, Serialize};

use crate::core::ChartItem;
use crate::render::Color;

/// Label color of every legend row, independent of the series color.
pub const LEGEND_LABEL_COLOR: Color = Color::WHITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwatchShape {
    Square,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Color,
    pub swatch: SwatchShape,
    pub label_color: Color,
}

/// One legend row per item, in list order.
///
/// Items sharing an axis still get their own row.
pub fn derive_legends<I: ChartItem>(items: &[I]) -> Vec<LegendEntry> {
    items
        .iter()
        .map(|item| LegendEntry {
            name: item.name().to_owned(),
            color: item.color(),
            swatch: SwatchShape::Square,
            label_color: LEGEND_LABEL_COLOR,
        })
        .collect()
}
