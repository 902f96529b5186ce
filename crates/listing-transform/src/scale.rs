//! Standard-deviation scaling without centering.

use polars::prelude::{ChunkVar, Column, DataFrame, DataType};
use tracing::{info, warn};

use listing_model::{SCALE_SUFFIX, ScaleFactor};

use crate::encode::columns_without;
use crate::error::{Result, TransformError};

/// Scales `column` by its sample standard deviation.
///
/// The result lands in a new `Float64` column `<column>_scale` appended after
/// the existing columns, holding `round(value / factor, 2)`; the source column
/// is removed. When the deviation is zero or undefined (a constant column or
/// fewer than two values) the factor falls back to 1.0.
pub fn scale_column(df: &DataFrame, column: &str) -> Result<(DataFrame, ScaleFactor)> {
    let source = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;
    if !source.dtype().is_numeric() {
        return Err(TransformError::NotNumeric {
            column: column.to_string(),
            dtype: source.dtype().to_string(),
        });
    }

    let output_column = format!("{column}{SCALE_SUFFIX}");
    if df.get_column_index(&output_column).is_some() {
        return Err(TransformError::DuplicateColumn {
            column: output_column,
        });
    }

    let values = source.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let factor = match values.std(1) {
        Some(std) if std.is_finite() && std > 0.0 => std,
        other => {
            warn!(
                column,
                std = ?other,
                "standard deviation is zero or undefined, scaling by 1.0"
            );
            1.0
        }
    };
    let scale = ScaleFactor {
        column: column.to_string(),
        output_column,
        factor,
    };

    let scaled: Vec<Option<f64>> = values
        .into_iter()
        .map(|value| value.map(|value| scale.scale(value)))
        .collect();
    let mut columns = columns_without(df, column);
    columns.push(Column::new(scale.output_column.as_str().into(), scaled));
    let frame = DataFrame::new(columns)?;
    info!(
        column,
        output = %scale.output_column,
        factor = scale.factor,
        "scaled column"
    );
    Ok((frame, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled_values(frame: &DataFrame, name: &str) -> Vec<f64> {
        frame
            .column(name)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn divides_by_sample_std() {
        // sample std of [2, 4, 6] is 2
        let df = DataFrame::new(vec![
            Column::new("Id".into(), [1i64, 2, 3]),
            Column::new("Nombre_avis".into(), [2i64, 4, 6]),
        ])
        .unwrap();

        let (frame, scale) = scale_column(&df, "Nombre_avis").unwrap();
        assert!((scale.factor - 2.0).abs() < 1e-12);
        assert_eq!(scale.output_column, "Nombre_avis_scale");
        assert_eq!(scaled_values(&frame, "Nombre_avis_scale"), vec![1.0, 2.0, 3.0]);
        assert!(frame.column("Nombre_avis").is_err());
    }

    #[test]
    fn appends_output_at_end() {
        let df = DataFrame::new(vec![
            Column::new("Disponabilitie_365".into(), [10i64, 20, 40]),
            Column::new("Prix".into(), [100i64, 80, 60]),
        ])
        .unwrap();

        let (frame, _) = scale_column(&df, "Disponabilitie_365").unwrap();
        let names: Vec<&str> = frame
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["Prix", "Disponabilitie_365_scale"]);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let df = DataFrame::new(vec![Column::new("x".into(), [1.0f64, 2.0, 4.0])]).unwrap();
        let (frame, _) = scale_column(&df, "x").unwrap();

        for value in scaled_values(&frame, "x_scale") {
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn constant_column_uses_unit_factor() {
        let df = DataFrame::new(vec![Column::new("x".into(), [5i64, 5, 5])]).unwrap();
        let (frame, scale) = scale_column(&df, "x").unwrap();

        assert_eq!(scale.factor, 1.0);
        assert_eq!(scaled_values(&frame, "x_scale"), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn single_row_uses_unit_factor() {
        let df = DataFrame::new(vec![Column::new("x".into(), [7i64])]).unwrap();
        let (_, scale) = scale_column(&df, "x").unwrap();

        assert_eq!(scale.factor, 1.0);
    }

    #[test]
    fn rejects_text_column() {
        let df = DataFrame::new(vec![Column::new("x".into(), ["a", "b"])]).unwrap();
        let err = scale_column(&df, "x").unwrap_err();

        assert!(matches!(err, TransformError::NotNumeric { .. }));
    }

    #[test]
    fn rejects_existing_output_name() {
        let df = DataFrame::new(vec![
            Column::new("x".into(), [1i64, 2]),
            Column::new("x_scale".into(), [1.0f64, 2.0]),
        ])
        .unwrap();
        let err = scale_column(&df, "x").unwrap_err();

        assert!(matches!(err, TransformError::DuplicateColumn { .. }));
    }
}
