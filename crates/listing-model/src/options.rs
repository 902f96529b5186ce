//! Configuration options for the preprocessing stages.

use serde::{Deserialize, Serialize};

use crate::schema::ListingField;

/// Prefix of the indicator columns generated for the department column.
pub const DEPARTMENT_PREFIX: &str = "Depart_";

/// Suffix appended to the name of a scaled column.
pub const SCALE_SUFFIX: &str = "_scale";

/// Behavior when the loaded table does not have the expected column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaPolicy {
    /// Abort the run with a schema mismatch error.
    #[default]
    Strict,
    /// Keep the original names and log a warning.
    Lenient,
}

/// Options for the cleaning stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Columns removed unconditionally.
    pub drop_columns: Vec<String>,

    /// Columns where a missing value means "none" and becomes 0.
    pub zero_fill_columns: Vec<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            drop_columns: [
                ListingField::Name,
                ListingField::HostId,
                ListingField::HostName,
                ListingField::LastReview,
            ]
            .iter()
            .map(|field| field.name().to_string())
            .collect(),
            zero_fill_columns: [ListingField::ReviewCount, ListingField::ReviewsPerMonth]
                .iter()
                .map(|field| field.name().to_string())
                .collect(),
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drop_columns(mut self, columns: Vec<String>) -> Self {
        self.drop_columns = columns;
        self
    }

    pub fn with_zero_fill_columns(mut self, columns: Vec<String>) -> Self {
        self.zero_fill_columns = columns;
        self
    }
}

/// Options for the encoding stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Columns replaced in place by 1-based ordinal ranks.
    pub ordinal_columns: Vec<String>,

    /// Column expanded into indicator columns.
    pub one_hot_column: String,

    /// Prefix of the generated indicator column names.
    pub one_hot_prefix: String,

    /// Cardinality above which one-hot encoding logs a warning.
    ///
    /// Encoding still creates one column per distinct value.
    pub cardinality_warning: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ordinal_columns: vec![
                ListingField::Neighborhood.name().to_string(),
                ListingField::RoomType.name().to_string(),
            ],
            one_hot_column: ListingField::Department.name().to_string(),
            one_hot_prefix: DEPARTMENT_PREFIX.to_string(),
            cardinality_warning: 64,
        }
    }
}

impl EncodeOptions {
    pub fn with_cardinality_warning(mut self, threshold: usize) -> Self {
        self.cardinality_warning = threshold;
        self
    }
}

/// Options controlling the whole preprocessing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub schema_policy: SchemaPolicy,
    pub clean: CleanOptions,
    pub encode: EncodeOptions,
    /// Columns divided by their standard deviation, in application order.
    pub scale_columns: Vec<String>,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self::listings()
    }
}

impl ProcessingOptions {
    /// The fixed listing configuration.
    pub fn listings() -> Self {
        Self {
            schema_policy: SchemaPolicy::Strict,
            clean: CleanOptions::default(),
            encode: EncodeOptions::default(),
            scale_columns: vec![
                ListingField::Availability.name().to_string(),
                ListingField::ReviewCount.name().to_string(),
            ],
        }
    }

    pub fn with_schema_policy(mut self, policy: SchemaPolicy) -> Self {
        self.schema_policy = policy;
        self
    }

    pub fn with_encode(mut self, encode: EncodeOptions) -> Self {
        self.encode = encode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_defaults_match_schema() {
        let options = ProcessingOptions::listings();
        assert_eq!(
            options.clean.drop_columns,
            vec!["Nom", "Hote_id", "Nom_hote", "Dernier_avis"]
        );
        assert_eq!(
            options.clean.zero_fill_columns,
            vec!["Nombre_avis", "Avis_par_mois"]
        );
        assert_eq!(options.encode.ordinal_columns, vec!["Quartier", "Type_chambre"]);
        assert_eq!(options.encode.one_hot_column, "Departement");
        assert_eq!(
            options.scale_columns,
            vec!["Disponabilitie_365", "Nombre_avis"]
        );
        assert_eq!(options.schema_policy, SchemaPolicy::Strict);
    }
}
