/// Narrowest width the chart is ever composed at.
///
/// Narrower containers break axis layout in the drawing layer.
pub const MIN_CHART_WIDTH: f64 = 110.0;

/// Width the chart is composed at.
///
/// A supplied width wins when it is non-zero; a missing, zero or NaN width
/// falls back to the measured container width. The result never drops
/// below [`MIN_CHART_WIDTH`], so a negative supplied width yields the floor,
/// and an infinite base collapses to the floor as well.
#[must_use]
pub fn effective_chart_width(supplied: Option<f64>, measured: f64) -> f64 {
    let base = supplied
        .filter(|width| !width.is_nan() && *width != 0.0)
        .unwrap_or(measured);
    if base.is_finite() {
        base.max(MIN_CHART_WIDTH)
    } else {
        MIN_CHART_WIDTH
    }
}
