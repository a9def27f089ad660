use std::cell::Cell;
use std::rc::Rc;

use timeline_chart::api::{
    ChartConfig, MeasuredElement, RenderOutcome, ResizeNotifier, ResponsiveChart, XAxisSpec,
};
use timeline_chart::core::{MIN_CHART_WIDTH, SeriesItem, SeriesPoint};
use timeline_chart::render::{Color, ComposedChart, NullRenderer, Renderer};
use timeline_chart::{ChartError, ChartResult};

struct Container {
    width: Cell<f64>,
}

impl MeasuredElement for Container {
    fn bounding_width(&self) -> f64 {
        self.width.get()
    }
}

fn container(width: f64) -> Rc<Container> {
    Rc::new(Container {
        width: Cell::new(width),
    })
}

fn items() -> Vec<SeriesItem> {
    vec![
        SeriesItem::line("m", "depth", Color::rgb(0.2, 0.4, 0.8))
            .with_points(vec![SeriesPoint::new(0.0, 1.0), SeriesPoint::new(1.0, 3.0)]),
        SeriesItem::moment_points("m", "samples", Color::rgb(0.9, 0.3, 0.1))
            .with_points(vec![SeriesPoint::moment(0.5)]),
    ]
}

fn build_chart(config: ChartConfig, notifier: ResizeNotifier) -> ResponsiveChart<NullRenderer> {
    ResponsiveChart::new(NullRenderer::default(), config, notifier).expect("chart init")
}

#[test]
fn render_follows_container_resizes() {
    let notifier = ResizeNotifier::new();
    let element = container(600.0);
    let mut chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), notifier.clone());
    chart.mount(element.clone());

    assert_eq!(chart.render(&items()).expect("render"), RenderOutcome::Chart);
    assert_eq!(chart.renderer().last_width, Some(600.0));
    assert_eq!(chart.renderer().last_item_count, 2);
    assert_eq!(chart.renderer().last_axis_count, 1);

    element.width.set(820.0);
    notifier.notify();
    chart.render(&items()).expect("render after resize");
    assert_eq!(chart.renderer().last_width, Some(820.0));
    assert_eq!(chart.renderer().render_count, 2);
}

#[test]
fn narrow_container_is_floored() {
    let mut chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), ResizeNotifier::new());
    chart.mount(container(48.0));
    assert_eq!(chart.effective_width(), MIN_CHART_WIDTH);
}

#[test]
fn unmounted_chart_uses_floor_until_measured() {
    let chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), ResizeNotifier::new());
    assert_eq!(chart.width_provider().width(), 0.0);
    assert_eq!(chart.effective_width(), MIN_CHART_WIDTH);
}

#[test]
fn supplied_width_overrides_measurement() {
    let config = ChartConfig::new(XAxisSpec::time("s")).with_width(333.0);
    let mut chart = build_chart(config, ResizeNotifier::new());
    chart.mount(container(900.0));
    assert_eq!(chart.effective_width(), 333.0);

    chart
        .set_config(ChartConfig::new(XAxisSpec::time("s")).with_width(0.0))
        .expect("zero width is accepted");
    assert_eq!(chart.effective_width(), 900.0);
}

#[test]
fn missing_x_axis_skips_renderer() {
    let mut chart = build_chart(ChartConfig::default(), ResizeNotifier::new());
    assert_eq!(chart.render(&items()).expect("render"), RenderOutcome::Skipped);
    assert_eq!(chart.renderer().render_count, 0);
}

#[test]
fn empty_items_render_empty_state() {
    let mut chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), ResizeNotifier::new());
    let items = vec![SeriesItem::line("m", "depth", Color::BLACK)];
    assert_eq!(chart.render(&items).expect("render"), RenderOutcome::Empty);

    let renderer = chart.into_renderer();
    assert!(renderer.last_was_empty_state);
    assert_eq!(renderer.last_width, Some(MIN_CHART_WIDTH));
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChartConfig::new(XAxisSpec::time("s")).with_height(0.0);
    let err = ResponsiveChart::new(NullRenderer::default(), config, ResizeNotifier::new())
        .err()
        .expect("zero height must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&mut self, _chart: &ComposedChart) -> ChartResult<()> {
        Err(ChartError::InvalidData("backend unavailable".to_owned()))
    }
}

#[test]
fn renderer_errors_propagate() {
    let mut chart = ResponsiveChart::new(
        FailingRenderer,
        ChartConfig::new(XAxisSpec::time("s")),
        ResizeNotifier::new(),
    )
    .expect("chart init");
    assert!(chart.render(&items()).is_err());
}

#[test]
fn invalid_item_colors_fail_validation_before_rendering() {
    let mut chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), ResizeNotifier::new());
    let items = vec![
        SeriesItem::line("m", "broken", Color::rgb(2.0, 0.0, 0.0))
            .with_points(vec![SeriesPoint::new(0.0, 1.0)]),
    ];
    assert!(chart.render(&items).is_err());
    assert_eq!(chart.renderer().render_count, 0);
}

#[test]
fn non_finite_samples_render_without_error() {
    let notifier = ResizeNotifier::new();
    let mut chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), notifier.clone());
    chart.mount(container(500.0));

    let items = vec![
        SeriesItem::line("m", "depth", Color::rgb(0.2, 0.4, 0.8)).with_points(vec![
            SeriesPoint::new(0.0, 1.0),
            SeriesPoint::new(1.0, f64::NAN),
            SeriesPoint::new(2.0, 3.0),
        ]),
        SeriesItem::moment_lines("m", "events", Color::rgb(0.9, 0.3, 0.1))
            .with_points(vec![SeriesPoint::moment(f64::NAN), SeriesPoint::moment(1.0)]),
    ];

    assert_eq!(chart.render(&items).expect("render"), RenderOutcome::Chart);
    assert_eq!(chart.renderer().render_count, 1);
    assert_eq!(chart.renderer().last_item_count, 2);
}

#[test]
fn unmount_detaches_from_notifier() {
    let notifier = ResizeNotifier::new();
    let element = container(500.0);
    let mut chart = build_chart(ChartConfig::new(XAxisSpec::time("s")), notifier.clone());
    chart.mount(element.clone());
    chart.unmount();

    element.width.set(1000.0);
    notifier.notify();
    assert_eq!(chart.effective_width(), 500.0);
    assert_eq!(notifier.listener_count(), 0);
}
