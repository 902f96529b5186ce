//! Positional renaming onto the listing schema.

use polars::prelude::DataFrame;
use tracing::{info, warn};

use listing_model::{SchemaPolicy, listing_column_names};

use crate::error::{Result, TransformError};

/// Output of the rename stage.
#[derive(Debug, Clone)]
pub struct Renamed {
    pub frame: DataFrame,
    /// False when a lenient policy kept the original names.
    pub applied: bool,
}

/// Replaces column names positionally with `target`.
///
/// Renaming only happens when the frame has exactly `target.len()` columns.
/// On any other width, [`SchemaPolicy::Strict`] fails with
/// [`TransformError::SchemaMismatch`] and [`SchemaPolicy::Lenient`] returns
/// the frame unchanged after logging a warning.
pub fn rename_columns(df: &DataFrame, target: &[&str], policy: SchemaPolicy) -> Result<Renamed> {
    if df.width() != target.len() {
        return match policy {
            SchemaPolicy::Strict => Err(TransformError::SchemaMismatch {
                expected: target.len(),
                found: df.width(),
            }),
            SchemaPolicy::Lenient => {
                warn!(
                    expected = target.len(),
                    found = df.width(),
                    "column count does not match schema, keeping original names"
                );
                Ok(Renamed {
                    frame: df.clone(),
                    applied: false,
                })
            }
        };
    }

    let mut frame = df.clone();
    frame.set_column_names(target.iter().copied())?;
    info!(columns = target.len(), "renamed columns to listing schema");
    Ok(Renamed {
        frame,
        applied: true,
    })
}

/// Renames onto the sixteen listing columns.
pub fn rename_to_listing_schema(df: &DataFrame, policy: SchemaPolicy) -> Result<Renamed> {
    rename_columns(df, &listing_column_names(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn frame(names: &[&str]) -> DataFrame {
        let columns = names
            .iter()
            .map(|name| Column::new((*name).into(), [1i64, 2]))
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn renames_positionally() {
        let df = frame(&["a", "b"]);
        let renamed = rename_columns(&df, &["x", "y"], SchemaPolicy::Strict).unwrap();

        assert!(renamed.applied);
        let names: Vec<String> = renamed
            .frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(renamed.frame.column("y").unwrap().i64().unwrap().get(1), Some(2));
        // input untouched
        assert!(df.column("a").is_ok());
    }

    #[test]
    fn strict_policy_rejects_width_mismatch() {
        let df = frame(&["a", "b", "c"]);
        let err = rename_columns(&df, &["x", "y"], SchemaPolicy::Strict).unwrap_err();

        assert!(matches!(
            err,
            TransformError::SchemaMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn lenient_policy_keeps_names() {
        let df = frame(&["a"]);
        let renamed = rename_columns(&df, &["x", "y"], SchemaPolicy::Lenient).unwrap();

        assert!(!renamed.applied);
        assert!(renamed.frame.column("a").is_ok());
    }

    #[test]
    fn listing_schema_needs_sixteen_columns() {
        let df = frame(&["a", "b"]);
        assert!(rename_to_listing_schema(&df, SchemaPolicy::Strict).is_err());
    }
}
