use crate::error::ChartResult;
use crate::render::{ComposedChart, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the composed chart so tests catch invalid output
/// before a real drawing layer sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_item_count: usize,
    pub last_axis_count: usize,
    pub last_legend_count: usize,
    pub last_width: Option<f64>,
    pub last_was_empty_state: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, chart: &ComposedChart) -> ChartResult<()> {
        chart.validate()?;
        self.render_count += 1;
        match chart {
            ComposedChart::Chart(surface) => {
                self.last_item_count = surface.items.len();
                self.last_axis_count = surface.y_axes.len();
                self.last_legend_count = surface.legend.entries.len();
                self.last_width = Some(surface.width);
                self.last_was_empty_state = false;
            }
            ComposedChart::Empty(placeholder) => {
                self.last_item_count = 0;
                self.last_axis_count = 0;
                self.last_legend_count = 0;
                self.last_width = Some(placeholder.width);
                self.last_was_empty_state = true;
            }
        }
        Ok(())
    }
}
