use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_CHART_HEIGHT: f64 = 110.0;
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Time,
    Log,
}

/// Required description of the horizontal axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisSpec {
    pub units: String,
    #[serde(default)]
    pub scale: AxisScale,
}

impl XAxisSpec {
    #[must_use]
    pub fn new(units: impl Into<String>, scale: AxisScale) -> Self {
        Self {
            units: units.into(),
            scale,
        }
    }

    #[must_use]
    pub fn time(units: impl Into<String>) -> Self {
        Self::new(units, AxisScale::Time)
    }
}

/// Visible ranges handed through to the drawing layer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDomain {
    #[serde(default)]
    pub x: Option<(f64, f64)>,
    #[serde(default)]
    pub y: Option<(f64, f64)>,
}

/// Theme tokens handed through to the drawing layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub background: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub tick_label_color: Color,
    pub font_family: String,
    pub font_size_px: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0.09, 0.10, 0.12),
            axis_color: Color::rgb(0.55, 0.58, 0.63),
            grid_color: Color::rgba(0.55, 0.58, 0.63, 0.2),
            tick_label_color: Color::rgb(0.80, 0.82, 0.85),
            font_family: "sans-serif".to_owned(),
            font_size_px: 10.0,
        }
    }
}

/// Host-facing chart configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings;
/// every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Explicit width; absent or 0 falls back to the measured container width.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub x_axis: Option<XAxisSpec>,
    #[serde(default)]
    pub domain: Option<ChartDomain>,
    /// Interaction/tooltip wiring owned by the drawing layer.
    #[serde(default)]
    pub container: Option<serde_json::Value>,
    #[serde(default)]
    pub theme: ChartTheme,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_height() -> f64 {
    DEFAULT_CHART_HEIGHT
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_owned()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: default_height(),
            x_axis: None,
            domain: None,
            container: None,
            theme: ChartTheme::default(),
            empty_message: default_empty_message(),
        }
    }
}

impl ChartConfig {
    /// Config with the given X axis and defaults elsewhere.
    #[must_use]
    pub fn new(x_axis: XAxisSpec) -> Self {
        Self {
            x_axis: Some(x_axis),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, x_axis: Option<XAxisSpec>) -> Self {
        self.x_axis = x_axis;
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: ChartDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: serde_json::Value) -> Self {
        self.container = Some(container);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "height must be finite and > 0, got {}",
                self.height
            )));
        }
        if let Some(width) = self.width {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "width must be finite and >= 0, got {width}"
                )));
            }
        }
        if let Some(domain) = self.domain {
            for (axis, range) in [("x", domain.x), ("y", domain.y)] {
                if let Some((start, end)) = range {
                    if !start.is_finite() || !end.is_finite() {
                        return Err(ChartError::InvalidConfig(format!(
                            "{axis} domain bounds must be finite"
                        )));
                    }
                }
            }
        }
        if !self.theme.font_size_px.is_finite() || self.theme.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "theme font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config json: {e}"))
        })
    }
}
