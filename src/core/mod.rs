pub mod convert;
pub mod series;
pub mod ticks;
pub mod types;

pub use convert::{decimal_column_to_f64, decimal_to_f64};
pub use series::{
    ColumnSeries, IndexedSeries, OHLC_FEATURE_KEYS, OhlcRecord, OhlcSeries, RowValues, SeriesShape,
};
pub use ticks::{AxisTick, LabelAxis};
pub use types::{PlotExtent, PlotPoint, Viewport};
