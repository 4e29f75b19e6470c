use tracing::debug;

use crate::core::{AxisTick, ColumnSeries, PlotExtent, PlotPoint};
use crate::error::{ChartError, ChartResult};
use crate::item::{ChartStyle, resolve_extent};
use crate::render::{GeometryBuffer, MarkerBatch, MarkerKind, PaintSurface, Polyline, Stroke};

/// Polyline overlay over selected columns of a series, with optional
/// fixed-size markers at every point.
///
/// Never produced by the factory: hosts construct it explicitly with the
/// column keys they want drawn.
#[derive(Debug, Clone)]
pub struct LineItem {
    series: ColumnSeries,
    keys: Vec<String>,
    marker: Option<MarkerKind>,
    style: ChartStyle,
    geometry: GeometryBuffer,
    extent: PlotExtent,
}

impl LineItem {
    pub fn new<I, K>(
        series: ColumnSeries,
        keys: I,
        style: ChartStyle,
        marker: Option<MarkerKind>,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let style = style.validate()?;
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(ChartError::InvalidData(
                "line item requires at least one column key".to_owned(),
            ));
        }
        for key in &keys {
            if !series.contains_column(key) {
                return Err(ChartError::UnknownColumnKey { key: key.clone() });
            }
        }
        let geometry = line_geometry(&series, &keys, &style, marker);
        let extent = resolve_extent(&geometry)?;
        debug!(
            columns = keys.len(),
            points = series.len(),
            markers = marker.is_some(),
            "built line geometry"
        );
        Ok(Self {
            series,
            keys,
            marker,
            style,
            geometry,
            extent,
        })
    }

    /// Vertical range over the visible ordinal window, spanning every
    /// column of the backing series.
    #[must_use]
    pub fn local_plot_range(&self, start: f64, end: f64) -> (f64, f64) {
        self.series.local_range(start, end)
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.series.x_ticks()
    }

    /// Projects one named column; `None` selects the first declared column
    /// of the backing series.
    pub fn feature_values(&self, key: Option<&str>) -> ChartResult<Vec<f64>> {
        self.series.feature_values(key)
    }

    pub fn paint<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        self.geometry.replay(surface)
    }

    #[must_use]
    pub fn bounding_extent(&self) -> PlotExtent {
        self.extent
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    #[must_use]
    pub fn series(&self) -> &ColumnSeries {
        &self.series
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn marker(&self) -> Option<MarkerKind> {
        self.marker
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

/// Builds one polyline per selected column, in key order, with point x set
/// to the ordinal. When a marker kind is given, a marker batch re-traverses
/// the same anchors so decoration stays aligned with the curve. Keys with
/// no matching column are skipped.
#[must_use]
pub fn line_geometry(
    series: &ColumnSeries,
    keys: &[String],
    style: &ChartStyle,
    marker: Option<MarkerKind>,
) -> GeometryBuffer {
    let mut buffer = GeometryBuffer::new();
    let stroke = Stroke::new(style.line_width_px, style.line_color);
    for key in keys {
        let Some(column) = series.column(key) else {
            continue;
        };
        let points: Vec<PlotPoint> = column
            .iter()
            .enumerate()
            .map(|(ordinal, value)| PlotPoint::new(ordinal as f64, *value))
            .collect();
        if let Some(kind) = marker {
            buffer.push_marker_batch(MarkerBatch::new(
                kind,
                points.clone(),
                style.marker_size_px,
                style.marker_color,
            ));
        }
        buffer.push_polyline(Polyline::new(points, stroke));
    }
    buffer
}
