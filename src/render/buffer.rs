use serde::{Deserialize, Serialize};

use crate::core::{PlotExtent, PlotPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{FillRect, MarkerBatch, PaintSurface, Polyline};

/// Immutable draw-command buffer cached by a chart item.
///
/// Commands replay in a fixed order: every rect, then every polyline, then
/// every marker batch, each group in insertion order. Replays are pure
/// reads, so one buffer can paint any number of frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryBuffer {
    rects: Vec<FillRect>,
    polylines: Vec<Polyline>,
    markers: Vec<MarkerBatch>,
}

impl GeometryBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rect(&mut self, rect: FillRect) {
        self.rects.push(rect);
    }

    pub fn push_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    pub fn push_marker_batch(&mut self, batch: MarkerBatch) {
        self.markers.push(batch);
    }

    #[must_use]
    pub fn rects(&self) -> &[FillRect] {
        &self.rects
    }

    #[must_use]
    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    #[must_use]
    pub fn marker_batches(&self) -> &[MarkerBatch] {
        &self.markers
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.polylines.is_empty() && self.markers.is_empty()
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.rects.len() + self.polylines.len() + self.markers.len()
    }

    /// Checks the style fields of every command. Data-space coordinates are
    /// not inspected.
    pub fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for batch in &self.markers {
            batch.validate()?;
        }
        Ok(())
    }

    /// Data-space bounds over every command, or `None` for an empty buffer.
    /// Marker extents cover anchors only; their device-pixel radius has no
    /// data-space size.
    #[must_use]
    pub fn extent(&self) -> Option<PlotExtent> {
        let mut extent: Option<PlotExtent> = None;
        for rect in &self.rects {
            include_point(&mut extent, PlotPoint::new(rect.x, rect.y));
            include_point(
                &mut extent,
                PlotPoint::new(rect.x + rect.width, rect.y + rect.height),
            );
        }
        for polyline in &self.polylines {
            for point in &polyline.points {
                include_point(&mut extent, *point);
            }
        }
        for batch in &self.markers {
            for anchor in &batch.anchors {
                include_point(&mut extent, *anchor);
            }
        }
        extent
    }

    /// Replays the cached commands onto a surface.
    ///
    /// Rects and polylines go out in data space. Marker batches are split
    /// into per-anchor draws: each anchor is mapped through the surface's
    /// reported transform and handed over in device space with a constant
    /// pixel radius.
    pub fn replay<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        for rect in &self.rects {
            surface.fill_rect(rect)?;
        }
        for polyline in &self.polylines {
            surface.stroke_polyline(polyline)?;
        }
        for batch in &self.markers {
            let radius_px = batch.size_px / 2.0;
            for anchor in &batch.anchors {
                let center = surface.data_to_device(*anchor);
                surface.draw_marker(batch.kind, center, radius_px, batch.color)?;
            }
        }
        Ok(())
    }

    /// Deterministic pretty-printed JSON snapshot of the buffer, for
    /// regression fixtures.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidData(format!("geometry snapshot serialization failed: {err}"))
        })
    }
}

fn include_point(extent: &mut Option<PlotExtent>, point: PlotPoint) {
    match extent {
        Some(extent) => extent.include_point(point),
        None => *extent = Some(PlotExtent::from_point(point)),
    }
}
