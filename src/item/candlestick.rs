use tracing::debug;

use crate::core::{AxisTick, OhlcSeries, PlotExtent};
use crate::error::ChartResult;
use crate::item::{ChartStyle, resolve_extent};
use crate::render::{FillRect, GeometryBuffer, PaintSurface};

/// Candlestick price bars: one body rect spanning open-to-close and one
/// thin shadow rect spanning low-to-high per ordinal, both cached at
/// construction and replayed on every paint.
#[derive(Debug, Clone)]
pub struct CandlestickPriceItem {
    series: OhlcSeries,
    style: ChartStyle,
    geometry: GeometryBuffer,
    extent: PlotExtent,
}

impl CandlestickPriceItem {
    pub fn new(series: OhlcSeries, style: ChartStyle) -> ChartResult<Self> {
        let style = style.validate()?;
        let geometry = candlestick_geometry(&series, &style);
        let extent = resolve_extent(&geometry)?;
        debug!(
            bars = series.len(),
            commands = geometry.command_count(),
            "built candlestick price geometry"
        );
        Ok(Self {
            series,
            style,
            geometry,
            extent,
        })
    }

    /// Vertical range of `low..high` over the visible ordinal window.
    #[must_use]
    pub fn local_plot_range(&self, start: f64, end: f64) -> (f64, f64) {
        self.series.local_range(start, end)
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.series.x_ticks()
    }

    /// Projects one OHLC feature column; `None` selects `close`.
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
    pub fn series(&self) -> &OhlcSeries {
        &self.series
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

/// Builds candle geometry for a whole series, in ordinal order: body first,
/// then shadow, per bar. Bodies and shadows share one color decided by
/// [`OhlcRecord::is_positive`](crate::core::OhlcRecord::is_positive).
///
/// Intentionally pure so regression tests can assert on geometry without a
/// drawing surface.
#[must_use]
pub fn candlestick_geometry(series: &OhlcSeries, style: &ChartStyle) -> GeometryBuffer {
    let mut buffer = GeometryBuffer::new();
    let half_shadow = style.shadow_width / 2.0;
    for (ordinal, record) in series.rows() {
        let x = ordinal as f64;
        let color = if record.is_positive() {
            style.positive_color
        } else {
            style.negative_color
        };
        buffer.push_rect(FillRect::from_corners(
            x - style.bar_width,
            record.open,
            x + style.bar_width,
            record.close,
            color,
        ));
        buffer.push_rect(FillRect::from_corners(
            x - half_shadow,
            record.low,
            x + half_shadow,
            record.high,
            color,
        ));
    }
    buffer
}
