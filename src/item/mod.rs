mod candlestick;
mod line;
mod style;
mod volume;

pub use candlestick::{CandlestickPriceItem, candlestick_geometry};
pub use line::{LineItem, line_geometry};
pub use style::ChartStyle;
pub use volume::{CandlestickVolumeItem, VOLUME_DISPLAY_SCALE, volume_geometry};

use tracing::debug;

use crate::core::{AxisTick, IndexedSeries, PlotExtent, SeriesShape};
use crate::error::{ChartError, ChartResult};
use crate::render::{GeometryBuffer, PaintSurface};

/// Closed set of chart item variants behind one query-and-paint surface.
///
/// Dispatch is a compile-time checked match on the variant, never a runtime
/// type probe. All variants share the same lifecycle: geometry is computed
/// once at construction and painting replays the cache.
#[derive(Debug, Clone)]
pub enum ChartItem {
    CandlestickPrice(CandlestickPriceItem),
    CandlestickVolume(CandlestickVolumeItem),
    Line(LineItem),
}

impl ChartItem {
    /// Maps a series onto its default item by declared shape: OHLC data
    /// becomes a price item, a single magnitude column becomes a volume
    /// item. Multi-column series have no default mapping; line items carry
    /// column choices no shape can imply, so hosts build them explicitly
    /// via [`LineItem::new`].
    pub fn for_series(series: IndexedSeries, style: ChartStyle) -> ChartResult<Self> {
        let shape = series.shape();
        debug!(%shape, rows = series.len(), "dispatch chart item for series");
        match series {
            IndexedSeries::Ohlc(series) => {
                Ok(Self::CandlestickPrice(CandlestickPriceItem::new(series, style)?))
            }
            IndexedSeries::Columns(series) if shape == SeriesShape::SingleMagnitude => Ok(
                Self::CandlestickVolume(CandlestickVolumeItem::new(series, style)?),
            ),
            IndexedSeries::Columns(_) => Err(ChartError::UnsupportedSeriesShape { shape }),
        }
    }

    #[must_use]
    pub fn local_plot_range(&self, start: f64, end: f64) -> (f64, f64) {
        match self {
            Self::CandlestickPrice(item) => item.local_plot_range(start, end),
            Self::CandlestickVolume(item) => item.local_plot_range(start, end),
            Self::Line(item) => item.local_plot_range(start, end),
        }
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        match self {
            Self::CandlestickPrice(item) => item.x_ticks(),
            Self::CandlestickVolume(item) => item.x_ticks(),
            Self::Line(item) => item.x_ticks(),
        }
    }

    pub fn feature_values(&self, key: Option<&str>) -> ChartResult<Vec<f64>> {
        match self {
            Self::CandlestickPrice(item) => item.feature_values(key),
            Self::CandlestickVolume(item) => item.feature_values(key),
            Self::Line(item) => item.feature_values(key),
        }
    }

    pub fn paint<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        match self {
            Self::CandlestickPrice(item) => item.paint(surface),
            Self::CandlestickVolume(item) => item.paint(surface),
            Self::Line(item) => item.paint(surface),
        }
    }

    #[must_use]
    pub fn bounding_extent(&self) -> PlotExtent {
        match self {
            Self::CandlestickPrice(item) => item.bounding_extent(),
            Self::CandlestickVolume(item) => item.bounding_extent(),
            Self::Line(item) => item.bounding_extent(),
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryBuffer {
        match self {
            Self::CandlestickPrice(item) => item.geometry(),
            Self::CandlestickVolume(item) => item.geometry(),
            Self::Line(item) => item.geometry(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        match self {
            Self::CandlestickPrice(item) => item.style(),
            Self::CandlestickVolume(item) => item.style(),
            Self::Line(item) => item.style(),
        }
    }

    /// Number of ordinal slots in the backing series.
    #[must_use]
    pub fn ordinal_count(&self) -> usize {
        match self {
            Self::CandlestickPrice(item) => item.series().len(),
            Self::CandlestickVolume(item) => item.series().len(),
            Self::Line(item) => item.series().len(),
        }
    }
}

impl From<CandlestickPriceItem> for ChartItem {
    fn from(item: CandlestickPriceItem) -> Self {
        Self::CandlestickPrice(item)
    }
}

impl From<CandlestickVolumeItem> for ChartItem {
    fn from(item: CandlestickVolumeItem) -> Self {
        Self::CandlestickVolume(item)
    }
}

impl From<LineItem> for ChartItem {
    fn from(item: LineItem) -> Self {
        Self::Line(item)
    }
}

/// Every item caches non-empty geometry; an empty buffer here means the
/// builder broke that invariant.
fn resolve_extent(geometry: &GeometryBuffer) -> ChartResult<PlotExtent> {
    geometry.extent().ok_or_else(|| {
        ChartError::InvalidData("chart item produced no geometry".to_owned())
    })
}
