use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Converts one exact decimal into the f64 plot domain.
pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts a whole decimal column, naming the column in conversion errors.
pub fn decimal_column_to_f64(name: &str, values: &[Decimal]) -> ChartResult<Vec<f64>> {
    values
        .iter()
        .map(|value| decimal_to_f64(*value, name))
        .collect()
}
