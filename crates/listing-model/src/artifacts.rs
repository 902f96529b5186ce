//! Fitted encoders and scale factors produced by a preprocessing run.
//!
//! Every transformation that learns something from the data returns one of
//! these values next to the transformed table, so a run can be inspected or
//! replayed on new records without re-fitting.

use serde::{Deserialize, Serialize};

/// Vocabulary of an ordinally encoded column.
///
/// Categories are held in lexicographic order. The code of `categories[i]`
/// is `i + 1`; code 0 is never assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalEncoding {
    pub column: String,
    pub categories: Vec<String>,
}

impl OrdinalEncoding {
    /// Build an encoding from arbitrary labels; duplicates are collapsed.
    pub fn fit<'a, I>(column: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut categories: Vec<String> = labels.into_iter().map(str::to_string).collect();
        categories.sort_unstable();
        categories.dedup();
        Self {
            column: column.into(),
            categories,
        }
    }

    /// 1-based code of `label`, or `None` for a label never seen while fitting.
    pub fn code(&self, label: &str) -> Option<i64> {
        self.categories
            .binary_search_by(|candidate| candidate.as_str().cmp(label))
            .ok()
            .and_then(|idx| i64::try_from(idx + 1).ok())
    }

    /// Label for a 1-based code.
    pub fn label(&self, code: i64) -> Option<&str> {
        let idx = usize::try_from(code).ok()?.checked_sub(1)?;
        self.categories.get(idx).map(String::as_str)
    }

    pub fn cardinality(&self) -> usize {
        self.categories.len()
    }
}

/// Indicator columns generated for one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotEncoding {
    pub column: String,
    pub prefix: String,
    /// Distinct labels in order of first appearance.
    pub categories: Vec<String>,
}

impl OneHotEncoding {
    /// Name of the indicator column for `category`.
    pub fn column_name(&self, category: &str) -> String {
        format!("{}{}", self.prefix, category)
    }

    /// Indicator column names in generation order.
    pub fn column_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| self.column_name(category))
            .collect()
    }

    pub fn cardinality(&self) -> usize {
        self.categories.len()
    }
}

/// Divisor applied to a scaled column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    pub column: String,
    pub output_column: String,
    /// Sample standard deviation of the source column, or 1.0 when undefined.
    pub factor: f64,
}

impl ScaleFactor {
    /// Scaled value rounded to two decimals.
    pub fn scale(&self, value: f64) -> f64 {
        round_to(value / self.factor, 2)
    }

    /// Approximate original value of a scaled value.
    pub fn unscale(&self, scaled: f64) -> f64 {
        scaled * self.factor
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Everything fitted during one run, in application order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifacts {
    pub ordinal: Vec<OrdinalEncoding>,
    pub one_hot: Vec<OneHotEncoding>,
    pub scale: Vec<ScaleFactor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_codes_are_one_based_and_sorted() {
        let encoding = OrdinalEncoding::fit("Type_chambre", ["Shared", "Entire", "Private", "Entire"]);
        assert_eq!(encoding.categories, vec!["Entire", "Private", "Shared"]);
        assert_eq!(encoding.code("Entire"), Some(1));
        assert_eq!(encoding.code("Shared"), Some(3));
        assert_eq!(encoding.code("Hotel"), None);
        assert_eq!(encoding.label(2), Some("Private"));
        assert_eq!(encoding.label(0), None);
    }

    #[test]
    fn one_hot_names_use_prefix() {
        let encoding = OneHotEncoding {
            column: "Departement".to_string(),
            prefix: "Depart_".to_string(),
            categories: vec!["Queens".to_string(), "Bronx".to_string()],
        };
        assert_eq!(encoding.column_names(), vec!["Depart_Queens", "Depart_Bronx"]);
    }

    #[test]
    fn round_to_two_places() {
        assert!((round_to(1.23456, 2) - 1.23).abs() < 1e-12);
        assert!((round_to(-1.234, 2) + 1.23).abs() < 1e-12);
    }
}
