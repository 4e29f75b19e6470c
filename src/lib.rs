//! stockplot: retained-geometry chart items for financial time series.
//!
//! Series data (OHLC records or named value columns) is converted once into
//! an immutable buffer of draw commands; painting replays that buffer onto
//! any [`render::PaintSurface`] with no per-frame recomputation. Range,
//! tick, and feature queries answer straight from the series, so hosts can
//! scale and decorate axes without touching geometry.

pub mod core;
pub mod error;
pub mod item;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use item::{CandlestickPriceItem, CandlestickVolumeItem, ChartItem, ChartStyle, LineItem};
