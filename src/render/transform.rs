use crate::core::{PlotPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Point in device (pixel) space. The y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine data-to-device mapping for one paint pass.
///
/// Hosts derive it per frame from the visible ordinal window, the value
/// range the items report, and the target viewport. Data y grows upward,
/// device y downward; the vertical scale is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    x_scale: f64,
    x_offset: f64,
    y_scale: f64,
    y_offset: f64,
}

impl PlotTransform {
    /// Pass-through transform mapping data coordinates onto themselves.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            x_scale: 1.0,
            x_offset: 0.0,
            y_scale: 1.0,
            y_offset: 0.0,
        }
    }

    /// Maps `x_window` onto `[0, viewport.width]` and `y_window` onto
    /// `[viewport.height, 0]`. Both windows must be finite with non-zero
    /// span; the viewport must have positive size.
    pub fn from_windows(
        x_window: (f64, f64),
        y_window: (f64, f64),
        viewport: Viewport,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (axis, (lo, hi)) in [("x", x_window), ("y", y_window)] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{axis} window bounds must be finite"
                )));
            }
            if lo == hi {
                return Err(ChartError::InvalidData(format!(
                    "{axis} window must have non-zero span"
                )));
            }
        }
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let x_scale = width / (x_window.1 - x_window.0);
        let y_scale = -height / (y_window.1 - y_window.0);
        Ok(Self {
            x_scale,
            x_offset: -x_window.0 * x_scale,
            y_scale,
            y_offset: height - y_window.0 * y_scale,
        })
    }

    #[must_use]
    pub fn apply(self, point: PlotPoint) -> DevicePoint {
        DevicePoint {
            x: point.x * self.x_scale + self.x_offset,
            y: point.y * self.y_scale + self.y_offset,
        }
    }
}

impl Default for PlotTransform {
    fn default() -> Self {
        Self::identity()
    }
}
