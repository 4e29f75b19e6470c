use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One x-axis tick candidate: an ordinal slot and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTick {
    pub ordinal: usize,
    pub label: String,
}

impl AxisTick {
    #[must_use]
    pub fn new(ordinal: usize, label: impl Into<String>) -> Self {
        Self {
            ordinal,
            label: label.into(),
        }
    }
}

/// Optional per-ordinal display labels attached to a series.
///
/// Labels never participate in plotting geometry; all positioning runs on
/// ordinals. They only feed x-axis tick extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LabelAxis {
    /// No labels are known; tick extraction yields no candidates.
    #[default]
    None,
    /// One calendar date per ordinal, expected in chronological order.
    Dates(Vec<NaiveDate>),
}

impl LabelAxis {
    /// Wraps a date column, warning when it is not chronologically ordered.
    /// Out-of-order dates still work but produce duplicate month ticks.
    #[must_use]
    pub fn from_dates(dates: Vec<NaiveDate>) -> Self {
        if dates.windows(2).any(|pair| pair[0] > pair[1]) {
            warn!(count = dates.len(), "label axis dates are out of order");
        }
        Self::Dates(dates)
    }

    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Dates(dates) => Some(dates.len()),
        }
    }

    /// Emits one tick per month boundary: every ordinal whose (year, month)
    /// differs from its predecessor's, labeled `YYYY-MM`. The first ordinal
    /// always qualifies.
    #[must_use]
    pub fn month_boundary_ticks(&self) -> Vec<AxisTick> {
        match self {
            Self::None => Vec::new(),
            Self::Dates(dates) => {
                let mut ticks = Vec::new();
                let mut previous: Option<(i32, u32)> = None;
                for (ordinal, date) in dates.iter().enumerate() {
                    let period = (date.year(), date.month());
                    if previous != Some(period) {
                        ticks.push(AxisTick::new(ordinal, date.format("%Y-%m").to_string()));
                        previous = Some(period);
                    }
                }
                ticks
            }
        }
    }
}
