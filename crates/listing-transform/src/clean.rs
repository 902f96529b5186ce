//! Null remediation and deduplication.
//!
//! Cleaning runs these steps in order:
//! 1. Measure the share of missing values per column (diagnostics only)
//! 2. Remove exact-duplicate rows, keeping the first occurrence
//! 3. Drop the non-predictive columns
//! 4. Replace missing review counts with 0 ("no reviews")
//! 5. Drop any row that still contains a missing value
//! 6. Remove rows that steps 3 and 4 made identical to an earlier row
//!
//! The returned frame has no null in any column and no duplicate row.

use std::cmp::Ordering;

use polars::prelude::{
    BooleanChunked, ChunkFull, Column, DataFrame, DataType, FillNullStrategy, IntoLazy,
    UniqueKeepStrategy,
};
use tracing::{debug, info, warn};

use listing_common::missing_percent;
use listing_model::{CleanOptions, CleaningReport, FillCount, MissingShare};

use crate::error::{Result, TransformError};

/// Output of the cleaning stage.
#[derive(Debug, Clone)]
pub struct Cleaned {
    pub frame: DataFrame,
    pub report: CleaningReport,
}

/// Cleans `df` according to `options`.
///
/// Columns listed in `options` but absent from the frame are skipped with a
/// warning.
pub fn clean(df: &DataFrame, options: &CleanOptions) -> Result<Cleaned> {
    let input_rows = df.height();

    let missing = missing_shares(df);
    for share in &missing {
        debug!(
            column = %share.column,
            missing = share.missing,
            percent = share.percent,
            "missing values"
        );
    }
    let max_percent = missing.first().map_or(0.0, |share| share.percent);
    info!(max_missing_percent = max_percent, "measured missing data");

    let (frame, duplicates_removed) = remove_duplicates(df)?;
    info!(duplicates = duplicates_removed, "removed duplicated rows");

    let (frame, dropped_columns) = drop_columns(&frame, &options.drop_columns)?;
    info!(columns = ?dropped_columns, "dropped non-predictive columns");

    let (frame, filled) = fill_zero(&frame, &options.zero_fill_columns)?;
    for fill in &filled {
        info!(column = %fill.column, filled = fill.filled, "replaced missing values with 0");
    }

    let (frame, rows_with_nulls_dropped) = drop_null_rows(&frame)?;
    info!(rows = rows_with_nulls_dropped, "dropped rows with remaining nulls");

    let (frame, collapsed) = remove_duplicates(&frame)?;
    if collapsed > 0 {
        info!(duplicates = collapsed, "removed rows duplicated by column drops and fills");
    }

    let report = CleaningReport {
        input_rows,
        missing,
        duplicates_removed: duplicates_removed + collapsed,
        dropped_columns,
        filled,
        rows_with_nulls_dropped,
        output_rows: frame.height(),
    };
    Ok(Cleaned { frame, report })
}

/// Per-column missing share, highest first; ties keep frame order.
pub fn missing_shares(df: &DataFrame) -> Vec<MissingShare> {
    let rows = df.height();
    let mut shares: Vec<MissingShare> = df
        .get_columns()
        .iter()
        .map(|column| {
            let missing = column.null_count();
            MissingShare {
                column: column.name().to_string(),
                missing,
                percent: missing_percent(missing, rows),
            }
        })
        .collect();
    shares.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(Ordering::Equal)
    });
    shares
}

/// Removes rows equal to an earlier row in every column.
///
/// Nulls compare equal to each other. Returns the frame and the number of
/// removed rows.
pub fn remove_duplicates(df: &DataFrame) -> Result<(DataFrame, usize)> {
    if df.width() == 0 || df.height() < 2 {
        return Ok((df.clone(), 0));
    }
    let unique = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    let removed = df.height() - unique.height();
    Ok((unique, removed))
}

fn drop_columns(df: &DataFrame, names: &[String]) -> Result<(DataFrame, Vec<String>)> {
    let mut frame = df.clone();
    let mut dropped = Vec::with_capacity(names.len());
    for name in names {
        if frame.get_column_index(name).is_none() {
            warn!(column = %name, "column to drop not present");
            continue;
        }
        frame = frame.drop(name)?;
        dropped.push(name.clone());
    }
    Ok((frame, dropped))
}

/// Replaces nulls with 0 in each of `names`.
///
/// A column with no value at all loads as text and becomes `Float64`. Any
/// other non-numeric column is rejected rather than coerced.
fn fill_zero(df: &DataFrame, names: &[String]) -> Result<(DataFrame, Vec<FillCount>)> {
    let mut frame = df.clone();
    let mut filled = Vec::with_capacity(names.len());
    for name in names {
        if frame.get_column_index(name).is_none() {
            warn!(column = %name, "column to fill not present");
            continue;
        }
        let column = frame.column(name)?;
        let nulls = column.null_count();
        let all_null = nulls == column.len();
        if !column.dtype().is_numeric() && !all_null {
            return Err(TransformError::NotNumeric {
                column: name.clone(),
                dtype: column.dtype().to_string(),
            });
        }
        if nulls > 0 {
            let mut series = column.as_materialized_series().clone();
            if !series.dtype().is_numeric() {
                series = series.cast(&DataType::Float64)?;
            }
            let series = series.fill_null(FillNullStrategy::Zero)?;
            frame.with_column(series)?;
        }
        filled.push(FillCount {
            column: name.clone(),
            filled: nulls,
        });
    }
    Ok((frame, filled))
}

/// Drops every row holding a null in any column.
pub fn drop_null_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let columns_with_nulls: Vec<&Column> = df
        .get_columns()
        .iter()
        .filter(|column| column.null_count() > 0)
        .collect();
    if columns_with_nulls.is_empty() {
        return Ok((df.clone(), 0));
    }
    let mut keep = BooleanChunked::full("keep".into(), true, df.height());
    for column in columns_with_nulls {
        keep = &keep & &column.is_not_null();
    }
    let frame = df.filter(&keep)?;
    let dropped = df.height() - frame.height();
    Ok((frame, dropped))
}
