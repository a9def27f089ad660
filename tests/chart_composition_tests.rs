use timeline_chart::api::{AxisScale, ChartConfig, ChartDomain, XAxisSpec, compose_chart};
use timeline_chart::core::{AxisDescriptor, LegendEntry, SeriesItem, SeriesPoint};
use timeline_chart::extensions::{ChartOverrides, DEFAULT_AXIS_OFFSET_PX, ItemStrategies};
use timeline_chart::render::{
    AxisPlacement, Color, ComposedChart, DrawingOp, LegendBlock, LegendOrientation, TextHAlign,
    YAxisDrawing,
};

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

fn config() -> ChartConfig {
    ChartConfig::new(XAxisSpec::time("s"))
}

fn example_items() -> Vec<SeriesItem> {
    vec![
        SeriesItem::line("m", "A", RED).with_points(vec![SeriesPoint::new(0.0, 1.0)]),
        SeriesItem::line("m", "B", GREEN).with_points(vec![SeriesPoint::new(0.0, 2.0)]),
        SeriesItem::moment_lines("m", "C", GREEN).with_points(vec![SeriesPoint::moment(0.0)]),
    ]
}

fn compose(items: &[SeriesItem], config: &ChartConfig) -> Option<ComposedChart> {
    compose_chart(
        640.0,
        config,
        items,
        &ItemStrategies::default(),
        &ChartOverrides::default(),
    )
}

#[test]
fn three_item_example_composes_full_chart() {
    let chart = compose(&example_items(), &config()).expect("chart composed");
    let surface = chart.surface().expect("populated chart");

    assert_eq!(surface.y_axes.len(), 1);
    assert_eq!(surface.y_axes[0].label, "m");
    assert_eq!(surface.legend.entries.len(), 3);
    assert_eq!(surface.items.len(), 3);
    assert_eq!(surface.line_count(), 2);
    assert!(matches!(surface.items[2], DrawingOp::MomentLines(_)));
    surface.validate().expect("valid surface");
}

#[test]
fn missing_x_axis_renders_nothing() {
    let config = config().with_x_axis(None);
    assert!(compose(&example_items(), &config).is_none());
    assert!(compose(&[], &config).is_none());
}

#[test]
fn all_empty_points_render_placeholder_sized_to_height() {
    let items = vec![
        SeriesItem::line("m", "A", RED),
        SeriesItem::moment_points("m", "B", GREEN),
    ];
    let config = config()
        .with_height(240.0)
        .with_empty_message("Nothing recorded yet");

    let chart = compose(&items, &config).expect("placeholder");
    let ComposedChart::Empty(placeholder) = chart else {
        panic!("expected empty state, got {chart:?}");
    };
    assert_eq!(placeholder.height, 240.0);
    assert_eq!(placeholder.width, 640.0);
    assert_eq!(placeholder.message, "Nothing recorded yet");
}

#[test]
fn zero_items_render_placeholder() {
    let chart = compose(&[], &config()).expect("placeholder");
    assert!(chart.is_empty_state());
}

#[test]
fn unknown_kind_counts_toward_data_check_but_draws_nothing() {
    let items = vec![
        SeriesItem::new("unknownKind", "V", "mystery", RED)
            .with_points(vec![SeriesPoint::new(0.0, 1.0)]),
        SeriesItem::line("m", "empty line", GREEN),
    ];
    let chart = compose(&items, &config()).expect("chart composed");
    let surface = chart.surface().expect("not the empty state");

    assert_eq!(surface.legend.entries.len(), 2);
    assert_eq!(surface.y_axes.len(), 2);
    assert_eq!(surface.items.len(), 1);
    assert_eq!(surface.items[0].key(), "item-1");
}

#[test]
fn drawings_keep_series_order() {
    let items = vec![
        SeriesItem::moment_lines("s", "first", RED).with_points(vec![SeriesPoint::moment(1.0)]),
        SeriesItem::line("m", "second", GREEN).with_points(vec![SeriesPoint::new(0.0, 1.0)]),
        SeriesItem::moment_points("m", "third", RED).with_points(vec![SeriesPoint::moment(0.0)]),
    ];
    let chart = compose(&items, &config()).expect("chart composed");
    let keys: Vec<&str> = chart
        .surface()
        .expect("surface")
        .items
        .iter()
        .map(DrawingOp::key)
        .collect();
    assert_eq!(keys, vec!["item-0", "item-1", "item-2"]);
}

#[test]
fn default_axes_alternate_sides_and_stack_outward() {
    let items: Vec<SeriesItem> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(|units| SeriesItem::line(units, units, RED).with_points(vec![SeriesPoint::new(0.0, 1.0)]))
        .collect();
    let chart = compose(&items, &config()).expect("chart composed");
    let axes = &chart.surface().expect("surface").y_axes;

    let placements: Vec<AxisPlacement> = axes.iter().map(|axis| axis.placement).collect();
    assert_eq!(
        placements,
        vec![
            AxisPlacement::Left,
            AxisPlacement::Right,
            AxisPlacement::Left,
            AxisPlacement::Right,
            AxisPlacement::Left,
        ]
    );
    assert_eq!(axes[0].offset_px, 0.0);
    assert_eq!(axes[3].offset_px, DEFAULT_AXIS_OFFSET_PX);
    assert_eq!(axes[4].offset_px, 2.0 * DEFAULT_AXIS_OFFSET_PX);
    assert!(axes.iter().all(|axis| axis.dependent && axis.axis_count == 5));
}

#[test]
fn default_legend_and_x_axis_follow_container_and_spec() {
    let config = config().with_x_axis(Some(XAxisSpec::new("hours", AxisScale::Linear)));
    let chart = compose(&example_items(), &config).expect("chart composed");
    let surface = chart.surface().expect("surface");

    assert_eq!(surface.legend.width, 640.0);
    assert_eq!(surface.legend.orientation, LegendOrientation::Horizontal);
    assert_eq!(surface.legend.title_h_align, TextHAlign::Center);
    assert_eq!(surface.x_axis.label, "hours");
    assert_eq!(surface.x_axis.scale, AxisScale::Linear);
    assert!(!surface.x_axis.dependent);
}

#[test]
fn overrides_replace_legend_and_axis_rendering() {
    let overrides = ChartOverrides::default()
        .with_legend_renderer(|entries: Vec<LegendEntry>, width: f64| LegendBlock {
            entries,
            orientation: LegendOrientation::Vertical,
            title: Some("Series".to_owned()),
            title_h_align: TextHAlign::Left,
            width: width / 2.0,
        })
        .with_y_axis_renderer(
            |axis: &AxisDescriptor, index: usize, axis_count: usize| YAxisDrawing {
                label: format!("{} ({}/{})", axis.units, index + 1, axis_count),
                color: axis.color,
                dependent: true,
                placement: AxisPlacement::Right,
                offset_px: 0.0,
                index,
                axis_count,
            },
        );

    let chart = compose_chart(
        500.0,
        &config(),
        &example_items(),
        &ItemStrategies::default(),
        &overrides,
    )
    .expect("chart composed");
    let surface = chart.surface().expect("surface");

    assert_eq!(surface.legend.orientation, LegendOrientation::Vertical);
    assert_eq!(surface.legend.width, 250.0);
    assert_eq!(surface.y_axes[0].label, "m (1/1)");
    assert_eq!(surface.y_axes[0].placement, AxisPlacement::Right);
}

#[test]
fn domain_theme_and_container_pass_through_untouched() {
    let domain = ChartDomain {
        x: Some((0.0, 60.0)),
        y: None,
    };
    let container = serde_json::json!({ "kind": "voronoi", "radius": 25 });
    let config = config()
        .with_domain(domain)
        .with_container(container.clone());

    let chart = compose(&example_items(), &config).expect("chart composed");
    let surface = chart.surface().expect("surface");
    assert_eq!(surface.domain, Some(domain));
    assert_eq!(surface.container, Some(container));
    assert_eq!(surface.theme, config.theme);
}
