use serde::{Deserialize, Serialize};

/// Pixel extent of the host drawing area a transform maps into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in data space: `x` is an ordinal slot, `y` a value coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of data-space geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotExtent {
    #[must_use]
    pub fn from_point(point: PlotPoint) -> Self {
        Self {
            x_min: point.x,
            x_max: point.x,
            y_min: point.y,
            y_max: point.y,
        }
    }

    pub fn include_point(&mut self, point: PlotPoint) {
        self.x_min = self.x_min.min(point.x);
        self.x_max = self.x_max.max(point.x);
        self.y_min = self.y_min.min(point.y);
        self.y_max = self.y_max.max(point.y);
    }

    pub fn include(&mut self, other: PlotExtent) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }
}
