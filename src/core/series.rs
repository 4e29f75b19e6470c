use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::convert::{decimal_column_to_f64, decimal_to_f64};
use crate::core::ticks::{AxisTick, LabelAxis};
use crate::error::{ChartError, ChartResult};

/// Feature keys every OHLC series can project.
pub const OHLC_FEATURE_KEYS: [&str; 4] = ["open", "close", "high", "low"];

/// Per-row values yielded by [`ColumnSeries::rows`], in column declaration
/// order. Inline capacity covers the common OHLC-sized case.
pub type RowValues = SmallVec<[f64; 4]>;

/// One OHLC observation.
///
/// Values are taken as-is: NaN or inverted bounds (`low > high`) are a
/// precondition violation by the caller and produce undefined geometry, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcRecord {
    #[must_use]
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    pub fn from_decimal(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self {
            open: decimal_to_f64(open, "open")?,
            high: decimal_to_f64(high, "high")?,
            low: decimal_to_f64(low, "low")?,
            close: decimal_to_f64(close, "close")?,
        })
    }

    /// Positive iff the bar closed strictly above its open. A no-change bar
    /// (`close == open`) counts as negative and takes the negative palette.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.close > self.open
    }
}

/// Shape classification the chart-item factory dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesShape {
    /// Four-column OHLC price data.
    OhlcPrice,
    /// Exactly one named magnitude column.
    SingleMagnitude,
    /// Two or more named columns.
    MultiColumn,
}

impl fmt::Display for SeriesShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OhlcPrice => "ohlc-price",
            Self::SingleMagnitude => "single-magnitude",
            Self::MultiColumn => "multi-column",
        };
        f.write_str(name)
    }
}

/// Ordinal window resolved from a fractional `[start, end]` view range.
enum OrdinalWindow {
    /// At least one ordinal falls inside the range.
    Span(usize, usize),
    /// The range contains no ordinal; holds the nearest in-bounds anchor.
    Collapsed(usize),
}

/// Maps a fractional view range onto the inclusive ordinal window
/// `[ceil(start), floor(end)]`, clamped to `[0, len - 1]`. An empty window
/// collapses to `round(start)` clamped into bounds.
fn resolve_window(len: usize, start: f64, end: f64) -> OrdinalWindow {
    let last = len.saturating_sub(1) as f64;
    let lo = start.ceil().max(0.0);
    let hi = end.floor().min(last);
    if lo <= hi {
        OrdinalWindow::Span(lo as usize, hi as usize)
    } else {
        OrdinalWindow::Collapsed(start.round().clamp(0.0, last) as usize)
    }
}

fn slice_min(values: &[f64]) -> Option<f64> {
    values.iter().copied().min_by_key(|value| OrderedFloat(*value))
}

fn slice_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().max_by_key(|value| OrderedFloat(*value))
}

fn check_labels(labels: &LabelAxis, len: usize) -> ChartResult<()> {
    match labels.len() {
        Some(label_len) if label_len != len => Err(ChartError::InvalidData(format!(
            "label axis length {label_len} does not match series length {len}"
        ))),
        _ => Ok(()),
    }
}

/// Column-major OHLC series indexed by ordinal position.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcSeries {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    labels: LabelAxis,
}

impl OhlcSeries {
    pub fn from_records(records: &[OhlcRecord], labels: LabelAxis) -> ChartResult<Self> {
        let mut open = Vec::with_capacity(records.len());
        let mut high = Vec::with_capacity(records.len());
        let mut low = Vec::with_capacity(records.len());
        let mut close = Vec::with_capacity(records.len());
        for record in records {
            open.push(record.open);
            high.push(record.high);
            low.push(record.low);
            close.push(record.close);
        }
        Self::from_columns(open, high, low, close, labels)
    }

    pub fn from_columns(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        labels: LabelAxis,
    ) -> ChartResult<Self> {
        let len = open.len();
        if len == 0 {
            return Err(ChartError::InvalidData(
                "ohlc series requires at least one row".to_owned(),
            ));
        }
        if high.len() != len || low.len() != len || close.len() != len {
            return Err(ChartError::InvalidData(format!(
                "ohlc columns must have equal lengths (open={}, high={}, low={}, close={})",
                open.len(),
                high.len(),
                low.len(),
                close.len()
            )));
        }
        check_labels(&labels, len)?;
        debug!(rows = len, "constructed ohlc series");
        Ok(Self {
            open,
            high,
            low,
            close,
            labels,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        SeriesShape::OhlcPrice
    }

    #[must_use]
    pub fn record(&self, ordinal: usize) -> Option<OhlcRecord> {
        Some(OhlcRecord {
            open: *self.open.get(ordinal)?,
            high: *self.high.get(ordinal)?,
            low: *self.low.get(ordinal)?,
            close: *self.close.get(ordinal)?,
        })
    }

    /// Ordinal-stamped row iterator. Restartable: each call walks the full
    /// series again.
    pub fn rows(&self) -> impl Iterator<Item = (usize, OhlcRecord)> + '_ {
        (0..self.len()).map(|ordinal| {
            (
                ordinal,
                OhlcRecord {
                    open: self.open[ordinal],
                    high: self.high[ordinal],
                    low: self.low[ordinal],
                    close: self.close[ordinal],
                },
            )
        })
    }

    #[must_use]
    pub fn open(&self) -> &[f64] {
        &self.open
    }

    #[must_use]
    pub fn high(&self) -> &[f64] {
        &self.high
    }

    #[must_use]
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    #[must_use]
    pub fn close(&self) -> &[f64] {
        &self.close
    }

    #[must_use]
    pub fn labels(&self) -> &LabelAxis {
        &self.labels
    }

    /// Vertical value range over the view range `[start, end]`: minimum of
    /// `low` and maximum of `high` across the resolved ordinal window. When
    /// the window is empty the range degenerates to the anchor's close.
    #[must_use]
    pub fn local_range(&self, start: f64, end: f64) -> (f64, f64) {
        match resolve_window(self.len(), start, end) {
            OrdinalWindow::Span(lo, hi) => {
                let min = slice_min(&self.low[lo..=hi]);
                let max = slice_max(&self.high[lo..=hi]);
                min.zip(max).unwrap_or_else(|| {
                    let anchor = self.close[lo];
                    (anchor, anchor)
                })
            }
            OrdinalWindow::Collapsed(anchor) => {
                let value = self.close[anchor];
                (value, value)
            }
        }
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.labels.month_boundary_ticks()
    }

    /// Projects one feature column. `None` selects `close`.
    pub fn feature_values(&self, key: Option<&str>) -> ChartResult<Vec<f64>> {
        let key = key.unwrap_or("close");
        let column = match key {
            "open" => &self.open,
            "close" => &self.close,
            "high" => &self.high,
            "low" => &self.low,
            _ => {
                return Err(ChartError::UnknownFeatureKey {
                    key: key.to_owned(),
                    available: OHLC_FEATURE_KEYS.join(", "),
                });
            }
        };
        trace!(key, len = column.len(), "project ohlc feature column");
        Ok(column.clone())
    }
}

/// Named value columns of equal length, indexed by ordinal position.
/// Columns keep their declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSeries {
    columns: IndexMap<String, Vec<f64>>,
    len: usize,
    labels: LabelAxis,
}

impl ColumnSeries {
    pub fn from_columns<I, K>(columns: I, labels: LabelAxis) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<f64>)>,
        K: Into<String>,
    {
        let mut map: IndexMap<String, Vec<f64>> = IndexMap::new();
        for (key, values) in columns {
            let key = key.into();
            if map.insert(key.clone(), values).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate column key `{key}`"
                )));
            }
        }
        Self::validated(map, labels)
    }

    pub fn from_decimal_columns<I, K>(columns: I, labels: LabelAxis) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<Decimal>)>,
        K: Into<String>,
    {
        let mut converted: Vec<(String, Vec<f64>)> = Vec::new();
        for (key, values) in columns {
            let key = key.into();
            let values = decimal_column_to_f64(&key, &values)?;
            converted.push((key, values));
        }
        Self::from_columns(converted, labels)
    }

    fn validated(columns: IndexMap<String, Vec<f64>>, labels: LabelAxis) -> ChartResult<Self> {
        let Some(len) = columns.values().next().map(Vec::len) else {
            return Err(ChartError::InvalidData(
                "column series requires at least one column".to_owned(),
            ));
        };
        if len == 0 {
            return Err(ChartError::InvalidData(
                "column series requires at least one row".to_owned(),
            ));
        }
        for (key, values) in &columns {
            if values.len() != len {
                return Err(ChartError::InvalidData(format!(
                    "column `{key}` length {} does not match series length {len}",
                    values.len()
                )));
            }
        }
        check_labels(&labels, len)?;
        debug!(rows = len, columns = columns.len(), "constructed column series");
        Ok(Self {
            columns,
            len,
            labels,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        if self.columns.len() == 1 {
            SeriesShape::SingleMagnitude
        } else {
            SeriesShape::MultiColumn
        }
    }

    #[must_use]
    pub fn column(&self, key: &str) -> Option<&[f64]> {
        self.columns.get(key).map(Vec::as_slice)
    }

    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains_column(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    /// The lone column, when exactly one exists.
    #[must_use]
    pub fn single_column(&self) -> Option<(&str, &[f64])> {
        if self.columns.len() == 1 {
            self.columns
                .first()
                .map(|(key, values)| (key.as_str(), values.as_slice()))
        } else {
            None
        }
    }

    /// Ordinal-stamped row iterator over all columns in declaration order.
    /// Restartable: each call walks the full series again.
    pub fn rows(&self) -> impl Iterator<Item = (usize, RowValues)> + '_ {
        (0..self.len).map(|ordinal| {
            let values: RowValues = self
                .columns
                .values()
                .map(|column| column[ordinal])
                .collect();
            (ordinal, values)
        })
    }

    #[must_use]
    pub fn labels(&self) -> &LabelAxis {
        &self.labels
    }

    /// Vertical value range over the view range `[start, end]`, spanning
    /// every column. When the window is empty the range degenerates to the
    /// anchor row's first-column value.
    #[must_use]
    pub fn local_range(&self, start: f64, end: f64) -> (f64, f64) {
        match resolve_window(self.len, start, end) {
            OrdinalWindow::Span(lo, hi) => {
                let mut min: Option<f64> = None;
                let mut max: Option<f64> = None;
                for column in self.columns.values() {
                    if let Some(column_min) = slice_min(&column[lo..=hi]) {
                        min = Some(min.map_or(column_min, |current| current.min(column_min)));
                    }
                    if let Some(column_max) = slice_max(&column[lo..=hi]) {
                        max = Some(max.map_or(column_max, |current| current.max(column_max)));
                    }
                }
                min.zip(max)
                    .unwrap_or_else(|| (self.anchor_value(lo), self.anchor_value(lo)))
            }
            OrdinalWindow::Collapsed(anchor) => {
                let value = self.anchor_value(anchor);
                (value, value)
            }
        }
    }

    fn anchor_value(&self, ordinal: usize) -> f64 {
        self.columns
            .values()
            .next()
            .and_then(|column| column.get(ordinal))
            .copied()
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.labels.month_boundary_ticks()
    }

    /// Projects one named column. `None` selects the first declared column.
    pub fn feature_values(&self, key: Option<&str>) -> ChartResult<Vec<f64>> {
        let column = match key {
            Some(key) => self.columns.get(key).ok_or_else(|| ChartError::UnknownFeatureKey {
                key: key.to_owned(),
                available: self.column_keys().collect::<Vec<_>>().join(", "),
            })?,
            None => match self.columns.values().next() {
                Some(column) => column,
                None => return Ok(Vec::new()),
            },
        };
        trace!(
            key = key.unwrap_or("<first>"),
            len = column.len(),
            "project named column"
        );
        Ok(column.clone())
    }
}

/// Tagged union over the two series layouts.
///
/// Chart items and the factory dispatch on [`IndexedSeries::shape`] instead
/// of downcasting; adding a layout means adding a variant and covering the
/// exhaustive matches the compiler then flags.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexedSeries {
    Ohlc(OhlcSeries),
    Columns(ColumnSeries),
}

impl IndexedSeries {
    #[must_use]
    pub fn shape(&self) -> SeriesShape {
        match self {
            Self::Ohlc(series) => series.shape(),
            Self::Columns(series) => series.shape(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Ohlc(series) => series.len(),
            Self::Columns(series) => series.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Ohlc(series) => series.is_empty(),
            Self::Columns(series) => series.is_empty(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &LabelAxis {
        match self {
            Self::Ohlc(series) => series.labels(),
            Self::Columns(series) => series.labels(),
        }
    }

    #[must_use]
    pub fn local_range(&self, start: f64, end: f64) -> (f64, f64) {
        match self {
            Self::Ohlc(series) => series.local_range(start, end),
            Self::Columns(series) => series.local_range(start, end),
        }
    }

    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        match self {
            Self::Ohlc(series) => series.x_ticks(),
            Self::Columns(series) => series.x_ticks(),
        }
    }

    pub fn feature_values(&self, key: Option<&str>) -> ChartResult<Vec<f64>> {
        match self {
            Self::Ohlc(series) => series.feature_values(key),
            Self::Columns(series) => series.feature_values(key),
        }
    }
}

impl From<OhlcSeries> for IndexedSeries {
    fn from(series: OhlcSeries) -> Self {
        Self::Ohlc(series)
    }
}

impl From<ColumnSeries> for IndexedSeries {
    fn from(series: ColumnSeries) -> Self {
        Self::Columns(series)
    }
}
