use std::rc::Rc;

use tracing::debug;

use crate::api::ChartConfig;
use crate::api::compose::compose_chart;
use crate::api::responsive::{MeasuredElement, ResizeNotifier, ResponsiveWidth};
use crate::core::{ChartItem, effective_chart_width};
use crate::error::ChartResult;
use crate::extensions::{ChartOverrides, ItemStrategies};
use crate::render::{ComposedChart, Renderer};

/// What a render pass handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Chart,
    Empty,
    /// No X axis configured; the renderer was not called.
    Skipped,
}

/// Chart bound to a responsive container.
///
/// Reads the published container width on every pass, composes the chart
/// from the items the host supplies and forwards the result to the renderer.
/// Items are borrowed per call and never retained.
pub struct ResponsiveChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    strategies: ItemStrategies,
    overrides: ChartOverrides,
    width: ResponsiveWidth,
}

impl<R: Renderer> ResponsiveChart<R> {
    pub fn new(renderer: R, config: ChartConfig, notifier: ResizeNotifier) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            strategies: ItemStrategies::default(),
            overrides: ChartOverrides::default(),
            width: ResponsiveWidth::new(notifier),
        })
    }

    #[must_use]
    pub fn with_strategies(mut self, strategies: ItemStrategies) -> Self {
        self.strategies = strategies;
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ChartOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Attaches the container element and starts following its width.
    pub fn mount(&mut self, element: Rc<dyn MeasuredElement>) {
        self.width.attach(element);
        self.width.mount();
    }

    pub fn unmount(&mut self) {
        self.width.unmount();
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_strategies(&mut self, strategies: ItemStrategies) {
        self.strategies = strategies;
    }

    pub fn set_overrides(&mut self, overrides: ChartOverrides) {
        self.overrides = overrides;
    }

    #[must_use]
    pub fn width_provider(&self) -> &ResponsiveWidth {
        &self.width
    }

    pub fn width_provider_mut(&mut self) -> &mut ResponsiveWidth {
        &mut self.width
    }

    #[must_use]
    pub fn effective_width(&self) -> f64 {
        effective_chart_width(self.config.width, self.width.width())
    }

    #[must_use]
    pub fn compose<I: ChartItem>(&self, items: &[I]) -> Option<ComposedChart> {
        compose_chart(
            self.effective_width(),
            &self.config,
            items,
            &self.strategies,
            &self.overrides,
        )
    }

    pub fn render<I: ChartItem>(&mut self, items: &[I]) -> ChartResult<RenderOutcome> {
        let Some(chart) = self.compose(items) else {
            return Ok(RenderOutcome::Skipped);
        };

        chart.validate()?;
        self.renderer.render(&chart)?;

        let outcome = if chart.is_empty_state() {
            RenderOutcome::Empty
        } else {
            RenderOutcome::Chart
        };
        debug!(?outcome, width = self.effective_width(), "chart rendered");
        Ok(outcome)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
