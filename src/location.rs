//! Location records shared by the catalog, the recent list and the search state.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single place candidate.
///
/// Records are plain values: two records with identical fields are the same
/// location, no matter which catalog lookup produced them. Coordinates are
/// compared by bit pattern so equality stays reflexive for every value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub address: String,
    pub category: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl LocationRecord {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        category: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            category: category.into(),
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite and survive a JSON round-trip.
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// JSON payload handed to the map view when a record is tapped.
    pub fn to_handoff_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Case-insensitive substring match over name, category and address.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
    }
}

impl PartialEq for LocationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.address == other.address
            && self.category == other.category
            && self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for LocationRecord {}

impl Hash for LocationRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.address.hash(state);
        self.category.hash(state);
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}
