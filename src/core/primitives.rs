use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Timeline x values are unix seconds with millisecond precision.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Linear interpolation of `y` at `x` between two samples.
///
/// Coincident sample times resolve to the left sample.
#[must_use]
pub fn lerp_at(x: f64, left: (f64, f64), right: (f64, f64)) -> f64 {
    let span = right.0 - left.0;
    if span == 0.0 {
        return left.1;
    }
    let t = (x - left.0) / span;
    left.1 + (right.1 - left.1) * t
}

#[cfg(test)]
mod tests {
    use super::{datetime_to_unix_seconds, lerp_at};
    use chrono::{TimeZone, Utc};

    #[test]
    fn lerp_hits_midpoint_and_endpoints() {
        assert_eq!(lerp_at(5.0, (0.0, 10.0), (10.0, 20.0)), 15.0);
        assert_eq!(lerp_at(0.0, (0.0, 10.0), (10.0, 20.0)), 10.0);
        assert_eq!(lerp_at(10.0, (0.0, 10.0), (10.0, 20.0)), 20.0);
    }

    #[test]
    fn lerp_with_zero_span_uses_left_sample() {
        assert_eq!(lerp_at(3.0, (3.0, 7.0), (3.0, 9.0)), 7.0);
    }

    #[test]
    fn datetime_converts_to_fractional_seconds() {
        let time = Utc
            .timestamp_millis_opt(1_700_000_000_250)
            .single()
            .expect("valid timestamp");
        assert_eq!(datetime_to_unix_seconds(time), 1_700_000_000.25);
    }
}
