//! Diagnostics returned by the cleaning stage.

use serde::{Deserialize, Serialize};

/// Share of missing values in one column before cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingShare {
    pub column: String,
    pub missing: usize,
    /// Percentage of rows, rounded to two decimals.
    pub percent: f64,
}

/// Zero-filled cells for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillCount {
    pub column: String,
    pub filled: usize,
}

/// What the cleaning stage observed and changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    /// Sorted by descending percentage, ties by column order.
    pub missing: Vec<MissingShare>,
    pub duplicates_removed: usize,
    pub dropped_columns: Vec<String>,
    pub filled: Vec<FillCount>,
    pub rows_with_nulls_dropped: usize,
    pub output_rows: usize,
}

impl CleaningReport {
    /// Highest missing percentage across all columns.
    pub fn max_missing_percent(&self) -> f64 {
        self.missing
            .iter()
            .map(|share| share.percent)
            .fold(0.0, f64::max)
    }

    pub fn total_filled(&self) -> usize {
        self.filled.iter().map(|fill| fill.filled).sum()
    }

    pub fn rows_removed(&self) -> usize {
        self.input_rows.saturating_sub(self.output_rows)
    }
}
