use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DevicePoint, FillRect, MarkerKind, PaintSurface, PlotTransform, Polyline,
};

/// One marker draw captured by [`RecordingSurface`], already in device
/// space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedMarker {
    pub kind: MarkerKind,
    pub center: DevicePoint,
    pub radius_px: f64,
    pub color: Color,
}

/// Headless paint surface that records every command it receives.
///
/// Style fields are validated on receipt, so a replay against this surface
/// doubles as a geometry sanity check without any real backend. `call_order`
/// keeps the command kinds in arrival order for replay-order assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    transform: PlotTransform,
    pub rects: Vec<FillRect>,
    pub polylines: Vec<Polyline>,
    pub markers: Vec<RecordedMarker>,
    pub call_order: Vec<&'static str>,
}

impl RecordingSurface {
    /// Surface with an identity transform: device space equals data space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_transform(transform: PlotTransform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.rects.len() + self.polylines.len() + self.markers.len()
    }
}

impl PaintSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: &FillRect) -> ChartResult<()> {
        rect.validate()?;
        self.rects.push(*rect);
        self.call_order.push("rect");
        Ok(())
    }

    fn stroke_polyline(&mut self, polyline: &Polyline) -> ChartResult<()> {
        polyline.validate()?;
        self.polylines.push(polyline.clone());
        self.call_order.push("polyline");
        Ok(())
    }

    fn data_to_device(&self, point: PlotPoint) -> DevicePoint {
        self.transform.apply(point)
    }

    fn draw_marker(
        &mut self,
        kind: MarkerKind,
        center: DevicePoint,
        radius_px: f64,
        color: Color,
    ) -> ChartResult<()> {
        if !radius_px.is_finite() || radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        color.validate()?;
        self.markers.push(RecordedMarker {
            kind,
            center,
            radius_px,
            color,
        });
        self.call_order.push("marker");
        Ok(())
    }
}
