//! Strict CSV reader producing a typed `DataFrame`.

use std::path::Path;

use csv::{ErrorKind, Reader, ReaderBuilder};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use listing_common::{parse_f64, parse_i64};

use crate::error::{IngestError, Result};

/// Cell contents read as a missing value, after trimming.
pub const NULL_TOKENS: [&str; 7] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Options for reading a listings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field separator.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> Option<&str> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if NULL_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

fn open_reader(path: &Path, options: &IngestOptions) -> Result<Reader<std::fs::File>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .delimiter(options.delimiter)
        .from_path(path)
        .map_err(|err| map_csv_error(path, err))
}

fn map_csv_error(path: &Path, err: csv::Error) -> IngestError {
    let line = err.position().map_or(0, csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => IngestError::Parse {
            path: path.to_path_buf(),
            line,
            message: format!("expected {expected_len} fields, found {len}"),
        },
        _ => IngestError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}

fn read_headers(reader: &mut Reader<std::fs::File>, path: &Path) -> Result<Vec<String>> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| map_csv_error(path, err))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads only the header row of a listings file.
pub fn read_schema(path: &Path, options: &IngestOptions) -> Result<Vec<String>> {
    let mut reader = open_reader(path, options)?;
    read_headers(&mut reader, path)
}

/// Reads a listings file into a `DataFrame`.
///
/// Column names and order follow the header row. Each column is `Int64` when
/// every present value parses as an integer, `Float64` when every present
/// value parses as a number, and `String` otherwise.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when the path does not exist,
/// [`IngestError::FileRead`] on I/O failure, and [`IngestError::Parse`] when a
/// record has a different field count than the header.
pub fn read_listings(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let mut reader = open_reader(path, options)?;
    let headers = read_headers(&mut reader, path)?;

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|err| map_csv_error(path, err))?;
        for (values, raw) in cells.iter_mut().zip(record.iter()) {
            values.push(normalize_cell(raw).map(str::to_string));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(&cells)
        .map(|(name, values)| build_column(name, values))
        .collect();
    let df = DataFrame::new(columns)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded listings"
    );
    Ok(df)
}

/// Builds a typed column from raw cells.
fn build_column(name: &str, values: &[Option<String>]) -> Column {
    let has_values = values.iter().any(Option::is_some);
    let column = if has_values && values.iter().flatten().all(|v| parse_i64(v).is_some()) {
        let parsed: Vec<Option<i64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(parse_i64))
            .collect();
        Column::new(name.into(), parsed)
    } else if has_values && values.iter().flatten().all(|v| parse_f64(v).is_some()) {
        let parsed: Vec<Option<f64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(parse_f64))
            .collect();
        Column::new(name.into(), parsed)
    } else {
        let text: Vec<Option<&str>> = values.iter().map(Option::as_deref).collect();
        Column::new(name.into(), text)
    };
    debug!(
        column = name,
        dtype = %column.dtype(),
        nulls = column.null_count(),
        "inferred column type"
    );
    column
}
