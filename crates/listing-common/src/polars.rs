//! Polars `AnyValue` and `DataFrame` helpers.

use polars::prelude::{AnyValue, DataFrame};

/// Converts a Polars `AnyValue` to a category label.
///
/// Returns `None` for `Null`. Floating point values are rendered without
/// trailing zeros so `2.0` and `2` produce the same label.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use listing_common::any_to_label;
///
/// assert_eq!(any_to_label(AnyValue::Null), None);
/// assert_eq!(any_to_label(AnyValue::Int64(7)), Some("7".to_string()));
/// assert_eq!(any_to_label(AnyValue::String("Queens")), Some("Queens".to_string()));
/// ```
pub fn any_to_label(value: AnyValue<'_>) -> Option<String> {
    let label = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    };
    Some(label)
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use listing_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Number of null cells across every column of `df`.
pub fn total_null_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|column| column.null_count()).sum()
}

/// Percentage of `missing` among `rows`, rounded to two decimals.
///
/// An empty frame has no missing values.
pub fn missing_percent(missing: usize, rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    let percent = missing as f64 / rows as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

/// Names of the columns whose dtype is not numeric, in frame order.
pub fn non_numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| !column.dtype().is_numeric())
        .map(|column| column.name().to_string())
        .collect()
}
