use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style bag read by every chart item variant when its geometry is built.
///
/// Widths in ordinal units: `bar_width` is a half-width, so a candle body
/// spans `[ordinal - bar_width, ordinal + bar_width]`, and `shadow_width` is
/// the full width of the high-low wick. Widths in device pixels:
/// `line_width_px` and `marker_size_px` (a diameter) stay constant under
/// zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub positive_color: Color,
    pub negative_color: Color,
    pub volume_color: Color,
    pub bar_width: f64,
    pub shadow_width: f64,
    pub line_color: Color,
    pub line_width_px: f64,
    pub marker_color: Color,
    pub marker_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            positive_color: Color::rgb(0.149, 0.651, 0.604),
            negative_color: Color::rgb(0.937, 0.325, 0.314),
            volume_color: Color::rgba(0.149, 0.651, 0.604, 0.5),
            bar_width: 0.3,
            shadow_width: 0.08,
            line_color: Color::rgb(0.129, 0.588, 0.953),
            line_width_px: 1.5,
            marker_color: Color::rgb(0.082, 0.396, 0.753),
            marker_size_px: 8.0,
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_palette(mut self, positive: Color, negative: Color) -> Self {
        self.positive_color = positive;
        self.negative_color = negative;
        self
    }

    #[must_use]
    pub fn with_volume_color(mut self, color: Color) -> Self {
        self.volume_color = color;
        self
    }

    #[must_use]
    pub fn with_bar_metrics(mut self, bar_width: f64, shadow_width: f64) -> Self {
        self.bar_width = bar_width;
        self.shadow_width = shadow_width;
        self
    }

    #[must_use]
    pub fn with_line(mut self, color: Color, width_px: f64) -> Self {
        self.line_color = color;
        self.line_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, color: Color, size_px: f64) -> Self {
        self.marker_color = color;
        self.marker_size_px = size_px;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("bar_width", self.bar_width),
            ("shadow_width", self.shadow_width),
            ("line_width_px", self.line_width_px),
            ("marker_size_px", self.marker_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style field `{name}` must be finite and > 0"
                )));
            }
        }
        for color in [
            self.positive_color,
            self.negative_color,
            self.volume_color,
            self.line_color,
            self.marker_color,
        ] {
            color.validate()?;
        }
        Ok(self)
    }
}
