mod buffer;
mod primitives;
mod recording;
mod transform;

pub use buffer::GeometryBuffer;
pub use primitives::{Color, FillRect, MarkerBatch, MarkerKind, Polyline, Stroke};
pub use recording::{RecordedMarker, RecordingSurface};
pub use transform::{DevicePoint, PlotTransform};

use crate::core::PlotPoint;
use crate::error::ChartResult;

/// Contract implemented by the host's drawing surface.
///
/// A surface is borrowed for the duration of one paint call and receives
/// cached draw commands in replay order. Rects and polylines arrive in data
/// space under whatever transform the surface applies internally;
/// `data_to_device` exposes that transform so markers can be positioned
/// explicitly and drawn in device space at constant pixel size, independent
/// of zoom.
pub trait PaintSurface {
    fn fill_rect(&mut self, rect: &FillRect) -> ChartResult<()>;

    fn stroke_polyline(&mut self, polyline: &Polyline) -> ChartResult<()>;

    /// Maps one data-space point through the surface's active transform.
    fn data_to_device(&self, point: PlotPoint) -> DevicePoint;

    fn draw_marker(
        &mut self,
        kind: MarkerKind,
        center: DevicePoint,
        radius_px: f64,
        color: Color,
    ) -> ChartResult<()>;
}
