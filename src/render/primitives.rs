use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

/// Stroke applied to polylines. `width_px` is a device-pixel width and does
/// not scale with the data-to-device transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width_px: f64,
    pub color: Color,
}

impl Stroke {
    #[must_use]
    pub const fn new(width_px: f64, color: Color) -> Self {
        Self { width_px, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width_px.is_finite() || self.width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle in data space, stored as a minimum corner
/// and non-negative size. A zero-height rect is legal: no-change candle
/// bodies keep their ordinal slot that way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl FillRect {
    /// Builds a rect from two opposite corners in either order; the span is
    /// normalized so `width` and `height` come out non-negative.
    #[must_use]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Self {
        let x = x1.min(x2);
        let y = y1.min(y2);
        Self {
            x,
            y,
            width: x1.max(x2) - x,
            height: y1.max(y2) - y,
            color,
        }
    }

    /// Validates style fields only. Coordinates carry caller data and are
    /// deliberately unchecked: malformed input renders as undefined output.
    pub fn validate(self) -> ChartResult<()> {
        self.color.validate()
    }
}

/// Connected polyline through data-space points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<PlotPoint>,
    pub stroke: Stroke,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<PlotPoint>, stroke: Stroke) -> Self {
        Self { points, stroke }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.stroke.validate()
    }
}

/// Marker glyphs drawn at constant device size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Circle,
}

impl MarkerKind {
    /// Name lookup for hosts configuring markers from text. `"circle"` and
    /// its shorthand `"o"` select [`MarkerKind::Circle`]; any other name
    /// yields `None`, which disables decoration.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "circle" | "o" => Some(Self::Circle),
            _ => None,
        }
    }
}

/// Batch of markers anchored at data-space points but sized in device
/// pixels. Anchors are mapped through the surface transform at paint time,
/// so marker size stays constant under zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerBatch {
    pub kind: MarkerKind,
    pub anchors: Vec<PlotPoint>,
    pub size_px: f64,
    pub color: Color,
}

impl MarkerBatch {
    #[must_use]
    pub fn new(kind: MarkerKind, anchors: Vec<PlotPoint>, size_px: f64, color: Color) -> Self {
        Self {
            kind,
            anchors,
            size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
