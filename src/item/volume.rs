use tracing::{debug, warn};

use crate::core::{AxisTick, ColumnSeries, PlotExtent, SeriesShape};
use crate::error::{ChartError, ChartResult};
use crate::item::{ChartStyle, resolve_extent};
use crate::render::{FillRect, GeometryBuffer, PaintSurface};

/// Display divisor applied to raw magnitudes before any geometry or range
/// math, keeping plot-space values near price scale instead of raw unit
/// scale.
pub const VOLUME_DISPLAY_SCALE: f64 = 1e8;

/// Volume bars: one baseline-anchored rect per ordinal, from zero up to the
/// scaled magnitude, cached at construction.
///
/// Requires a single-magnitude series; any other shape is rejected.
#[derive(Debug, Clone)]
pub struct CandlestickVolumeItem {
    series: ColumnSeries,
    style: ChartStyle,
    geometry: GeometryBuffer,
    extent: PlotExtent,
}

impl CandlestickVolumeItem {
    pub fn new(series: ColumnSeries, style: ChartStyle) -> ChartResult<Self> {
        let style = style.validate()?;
        let shape = series.shape();
        if shape != SeriesShape::SingleMagnitude {
            return Err(ChartError::UnsupportedSeriesShape { shape });
        }
        let negative_rows = series
            .rows()
            .filter(|(_, values)| values.first().is_some_and(|value| *value < 0.0))
            .count();
        if negative_rows > 0 {
            warn!(negative_rows, "volume magnitudes below zero extend below the baseline");
        }
        let geometry = volume_geometry(&series, &style);
        let extent = resolve_extent(&geometry)?;
        debug!(
            bars = series.len(),
            commands = geometry.command_count(),
            "built volume geometry"
        );
        Ok(Self {
            series,
            style,
            geometry,
            extent,
        })
    }

    /// Vertical range over the visible ordinal window: always from zero up
    /// to the scaled maximum, so bars stay baseline-anchored while scrolling.
    #[must_use]
    pub fn local_plot_range(&self, start: f64, end: f64) -> (f64, f64) {
        let (_, max) = self.series.local_range(start, end);
        (0.0, max / VOLUME_DISPLAY_SCALE)
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.series.x_ticks()
    }

    /// Returns the scaled magnitude sequence. The key argument is accepted
    /// for interface parity and ignored: a volume item projects exactly one
    /// feature.
    pub fn feature_values(&self, _key: Option<&str>) -> ChartResult<Vec<f64>> {
        let values = self.series.feature_values(None)?;
        Ok(values
            .into_iter()
            .map(|value| value / VOLUME_DISPLAY_SCALE)
            .collect())
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
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

/// Builds volume bar geometry in ordinal order. Each bar spans from the
/// zero baseline to `magnitude / VOLUME_DISPLAY_SCALE`; negative magnitudes
/// normalize to a bar hanging below the baseline.
#[must_use]
pub fn volume_geometry(series: &ColumnSeries, style: &ChartStyle) -> GeometryBuffer {
    let mut buffer = GeometryBuffer::new();
    for (ordinal, values) in series.rows() {
        let x = ordinal as f64;
        let scaled = values.first().copied().unwrap_or(0.0) / VOLUME_DISPLAY_SCALE;
        buffer.push_rect(FillRect::from_corners(
            x - style.bar_width,
            0.0,
            x + style.bar_width,
            scaled,
            style.volume_color,
        ));
    }
    buffer
}
