//! Blob format for the recent list: a JSON array of location objects,
//! most recent first, field for field with no envelope.
//!
//! `[]` is the empty list. Anything that does not decode as an array of
//! records is corrupt. JSON has no NaN or infinity, so records with
//! non-finite coordinates are refused at encode time instead of being
//! written as `null` and poisoning the whole blob.

use thiserror::Error;

use crate::location::LocationRecord;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to encode recent list: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Location '{name}' has a non-finite coordinate and cannot be stored")]
    NonFiniteCoordinate { name: String },

    #[error("Malformed recent list blob: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode(entries: &[LocationRecord]) -> Result<String, CodecError> {
    if let Some(bad) = entries.iter().find(|e| !e.has_finite_coordinates()) {
        return Err(CodecError::NonFiniteCoordinate {
            name: bad.name.clone(),
        });
    }
    serde_json::to_string(entries).map_err(CodecError::Encode)
}

pub fn decode(blob: &str) -> Result<Vec<LocationRecord>, CodecError> {
    serde_json::from_str(blob).map_err(CodecError::Decode)
}
