use thiserror::Error;

use crate::core::SeriesShape;

pub type ChartResult<T> = Result<T, ChartError>;

/// Crate-wide error taxonomy.
///
/// All failures are local and immediate: they abort the construction or
/// query that raised them and never touch an already built chart item.
/// Malformed numeric input (NaN, inverted OHLC bounds, negative magnitudes)
/// is a documented precondition violation rather than an error and
/// propagates as undefined visual output.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series shape `{shape}` has no chart item mapping")]
    UnsupportedSeriesShape { shape: SeriesShape },

    #[error("unknown feature key `{key}` (available: {available})")]
    UnknownFeatureKey { key: String, available: String },

    #[error("unknown column key `{key}`")]
    UnknownColumnKey { key: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
