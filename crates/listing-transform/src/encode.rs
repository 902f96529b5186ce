//! Categorical encoding.
//!
//! Ordinal encoding replaces labels in place with 1-based ranks over the
//! lexicographically sorted vocabulary. One-hot encoding replaces a column
//! with one 0/1 indicator column per distinct label, in order of first
//! appearance.

use std::collections::HashSet;

use polars::prelude::{Column, DataFrame, DataType};
use tracing::{debug, info, warn};

use listing_common::any_to_label;
use listing_model::{OneHotEncoding, OrdinalEncoding};

use crate::error::{Result, TransformError};

fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })
}

/// Every column of `df` except `name`, in frame order.
pub(crate) fn columns_without(df: &DataFrame, name: &str) -> Vec<Column> {
    df.get_columns()
        .iter()
        .filter(|column| column.name().as_str() != name)
        .cloned()
        .collect()
}

/// Ordinally encodes each of `columns`, fitting every column independently.
///
/// Values become `Int64` codes starting at 1; nulls stay null. Only string
/// columns are accepted, so a column that was already encoded is rejected
/// with [`TransformError::NotCategorical`] instead of being encoded twice.
pub fn ordinal_encode(
    df: &DataFrame,
    columns: &[String],
) -> Result<(DataFrame, Vec<OrdinalEncoding>)> {
    let mut frame = df.clone();
    let mut encodings = Vec::with_capacity(columns.len());
    for name in columns {
        let (codes, encoding) = {
            let column = require_column(&frame, name)?;
            if column.dtype() != &DataType::String {
                return Err(TransformError::NotCategorical {
                    column: name.clone(),
                    dtype: column.dtype().to_string(),
                });
            }
            let labels = column.str()?;
            let encoding = OrdinalEncoding::fit(name.as_str(), labels.into_iter().flatten());
            let codes: Vec<Option<i64>> = labels
                .into_iter()
                .map(|label| label.and_then(|label| encoding.code(label)))
                .collect();
            (codes, encoding)
        };
        frame.with_column(Column::new(name.as_str().into(), codes))?;
        debug!(
            column = %name,
            categories = encoding.cardinality(),
            "ordinal encoded column"
        );
        encodings.push(encoding);
    }
    info!(columns = ?columns, "ordinal encoding complete");
    Ok((frame, encodings))
}

/// Expands `column` into `Int32` indicator columns named `prefix + label`.
///
/// Indicators are appended after the existing columns and the source column is
/// removed. Nulls are not a category: a null row is 0 in every indicator.
/// Exactly one column is generated per distinct label, with a warning when
/// the count exceeds `cardinality_warning`.
pub fn one_hot_encode(
    df: &DataFrame,
    column: &str,
    prefix: &str,
    cardinality_warning: usize,
) -> Result<(DataFrame, OneHotEncoding)> {
    let source = require_column(df, column)?;
    let mut labels: Vec<Option<String>> = Vec::with_capacity(source.len());
    for idx in 0..source.len() {
        labels.push(any_to_label(source.get(idx)?));
    }

    let mut seen = HashSet::new();
    let categories: Vec<String> = labels
        .iter()
        .flatten()
        .filter(|label| seen.insert(label.as_str()))
        .cloned()
        .collect();
    let encoding = OneHotEncoding {
        column: column.to_string(),
        prefix: prefix.to_string(),
        categories,
    };

    if encoding.cardinality() > cardinality_warning {
        warn!(
            column,
            cardinality = encoding.cardinality(),
            threshold = cardinality_warning,
            "high cardinality one-hot encoding"
        );
    }

    let mut columns = columns_without(df, column);
    for category in &encoding.categories {
        let name = encoding.column_name(category);
        if columns.iter().any(|existing| existing.name().as_str() == name) {
            return Err(TransformError::DuplicateColumn { column: name });
        }
        let values: Vec<i32> = labels
            .iter()
            .map(|label| i32::from(label.as_deref() == Some(category.as_str())))
            .collect();
        columns.push(Column::new(name.into(), values));
    }
    let frame = DataFrame::new(columns)?;
    info!(
        column,
        generated = encoding.cardinality(),
        "one-hot encoding complete"
    );
    Ok((frame, encoding))
}
