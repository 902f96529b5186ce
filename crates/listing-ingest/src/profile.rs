//! Per-column profile of a freshly loaded table.

use polars::prelude::DataFrame;

use listing_common::missing_percent;

/// Type and completeness of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub nulls: usize,
    pub missing_percent: f64,
}

/// Profiles every column of `df` in frame order.
pub fn profile_columns(df: &DataFrame) -> Vec<ColumnProfile> {
    let rows = df.height();
    df.get_columns()
        .iter()
        .map(|column| {
            let nulls = column.null_count();
            ColumnProfile {
                name: column.name().to_string(),
                dtype: column.dtype().to_string(),
                nulls,
                missing_percent: missing_percent(nulls, rows),
            }
        })
        .collect()
}
