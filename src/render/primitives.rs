use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque_alpha")]
    pub alpha: f64,
}

fn opaque_alpha() -> f64 {
    1.0
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let mut channels = [255_u8; 4];
        for (slot, start) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
            *slot = u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{input}` has non-hex digits"))
            })?;
        }

        let [red, green, blue, alpha] = channels.map(|value| f64::from(value) / 255.0);
        Ok(Self::rgba(red, green, blue, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment for titles and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_colors_parse_with_and_without_alpha() {
        let teal = Color::from_hex("#008080").expect("rgb hex");
        assert_eq!(teal.red, 0.0);
        assert!((teal.green - 128.0 / 255.0).abs() <= 1e-12);
        assert_eq!(teal.alpha, 1.0);

        let faded = Color::from_hex("ffffff00").expect("rgba hex");
        assert_eq!(faded, Color::rgba(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zz0000").is_err());
    }
}
