//! Fixed schema of the raw listings file.
//!
//! The raw export carries sixteen positional columns. Renaming binds each
//! position to a [`ListingField`], and every later stage addresses columns by
//! the field's name rather than by the header found in the file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a listing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Record or host key.
    Identifier,
    /// Free text, never encoded.
    Text,
    /// Categorical label without order.
    Nominal,
    /// Categorical label encoded to ranks.
    Ordinal,
    /// Integer or floating point measurement.
    Numeric,
    /// Calendar date.
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Identifier => "identifier",
            FieldKind::Text => "text",
            FieldKind::Nominal => "nominal",
            FieldKind::Ordinal => "ordinal",
            FieldKind::Numeric => "numeric",
            FieldKind::Date => "date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A column of the listings table after renaming.
///
/// Variants are declared in input order; [`ListingField::ALL`] is the rename
/// target list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListingField {
    Id,
    Name,
    HostId,
    HostName,
    Department,
    Neighborhood,
    Latitude,
    Longitude,
    RoomType,
    Price,
    MinimumNights,
    ReviewCount,
    LastReview,
    ReviewsPerMonth,
    HostListingCount,
    Availability,
}

impl ListingField {
    /// Every field in input column order.
    pub const ALL: [ListingField; 16] = [
        ListingField::Id,
        ListingField::Name,
        ListingField::HostId,
        ListingField::HostName,
        ListingField::Department,
        ListingField::Neighborhood,
        ListingField::Latitude,
        ListingField::Longitude,
        ListingField::RoomType,
        ListingField::Price,
        ListingField::MinimumNights,
        ListingField::ReviewCount,
        ListingField::LastReview,
        ListingField::ReviewsPerMonth,
        ListingField::HostListingCount,
        ListingField::Availability,
    ];

    /// Column name used from the rename stage onwards.
    pub fn name(&self) -> &'static str {
        match self {
            ListingField::Id => "Id",
            ListingField::Name => "Nom",
            ListingField::HostId => "Hote_id",
            ListingField::HostName => "Nom_hote",
            ListingField::Department => "Departement",
            ListingField::Neighborhood => "Quartier",
            ListingField::Latitude => "Latitude",
            ListingField::Longitude => "Longitude",
            ListingField::RoomType => "Type_chambre",
            ListingField::Price => "Prix",
            ListingField::MinimumNights => "Minimum_nuit",
            ListingField::ReviewCount => "Nombre_avis",
            ListingField::LastReview => "Dernier_avis",
            ListingField::ReviewsPerMonth => "Avis_par_mois",
            ListingField::HostListingCount => "Nombre_list_hote",
            ListingField::Availability => "Disponabilitie_365",
        }
    }

    /// Human description of the source column at this position.
    pub fn description(&self) -> &'static str {
        match self {
            ListingField::Id => "listing id",
            ListingField::Name => "listing name",
            ListingField::HostId => "host id",
            ListingField::HostName => "host name",
            ListingField::Department => "department (borough)",
            ListingField::Neighborhood => "neighborhood",
            ListingField::Latitude => "latitude",
            ListingField::Longitude => "longitude",
            ListingField::RoomType => "room type",
            ListingField::Price => "price",
            ListingField::MinimumNights => "minimum nights",
            ListingField::ReviewCount => "number of reviews",
            ListingField::LastReview => "last review date",
            ListingField::ReviewsPerMonth => "reviews per month",
            ListingField::HostListingCount => "host listing count",
            ListingField::Availability => "availability (days per year)",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            ListingField::Id | ListingField::HostId => FieldKind::Identifier,
            ListingField::Name | ListingField::HostName => FieldKind::Text,
            ListingField::Department => FieldKind::Nominal,
            ListingField::Neighborhood | ListingField::RoomType => FieldKind::Ordinal,
            ListingField::LastReview => FieldKind::Date,
            ListingField::Latitude
            | ListingField::Longitude
            | ListingField::Price
            | ListingField::MinimumNights
            | ListingField::ReviewCount
            | ListingField::ReviewsPerMonth
            | ListingField::HostListingCount
            | ListingField::Availability => FieldKind::Numeric,
        }
    }

    /// 0-based position in the raw file.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Look up a field by its renamed column name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rename target list in input order.
pub fn listing_column_names() -> Vec<&'static str> {
    ListingField::ALL.iter().map(ListingField::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_declaration_order() {
        for (idx, field) in ListingField::ALL.iter().enumerate() {
            assert_eq!(field.position(), idx);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names = listing_column_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ListingField::ALL.len());
    }

    #[test]
    fn looks_up_exact_names() {
        assert_eq!(ListingField::from_name("Prix"), Some(ListingField::Price));
        assert_eq!(ListingField::from_name("prix"), None);
        assert_eq!(ListingField::from_name("room_type"), None);
    }
}
