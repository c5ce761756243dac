//! In-memory catalog backing the reference search engine.

use std::fs;
use std::path::Path;

use crate::location::LocationRecord;
use crate::search::engine::{SearchEngine, SearchError};

const SAMPLE_SIZE: usize = 10;
const SAMPLE_BASE_LAT: f64 = 37.5445;
const SAMPLE_BASE_LON: f64 = 127.0557;

/// Location catalog with case-insensitive substring matching over name,
/// category and address. Matches come back in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<LocationRecord>,
    max_results: Option<usize>,
}

impl Catalog {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self {
            records,
            max_results: None,
        }
    }

    /// Load a catalog from a JSON array of location records.
    pub fn from_json_file(path: &Path) -> Result<Self, SearchError> {
        let content = fs::read_to_string(path).map_err(|e| SearchError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let records: Vec<LocationRecord> =
            serde_json::from_str(&content).map_err(|e| SearchError::CatalogParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(path = %path.display(), size = records.len(), "Catalog loaded");
        Ok(Self::new(records))
    }

    /// Built-in demo catalog: numbered cafes and pharmacies around Seongsu-dong.
    pub fn sample() -> Self {
        let mut records = Vec::with_capacity(SAMPLE_SIZE * 2);
        for (category, label) in [("cafe", "Cafe"), ("pharmacy", "Pharmacy")] {
            for i in 1..=SAMPLE_SIZE {
                let offset = i as f64 * 0.001;
                records.push(LocationRecord::new(
                    format!("{label} {i}"),
                    format!("{i} Seongsu-dong, Seongdong-gu, Seoul"),
                    category,
                    SAMPLE_BASE_LAT + offset,
                    SAMPLE_BASE_LON + offset,
                ));
            }
        }
        Self::new(records)
    }

    /// Cap the number of matches a query returns.
    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|record| record.name == name)
    }
}

impl SearchEngine for Catalog {
    fn query(&self, text: &str) -> Result<Vec<LocationRecord>, SearchError> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let limit = self.max_results.unwrap_or(usize::MAX);
        Ok(self
            .records
            .iter()
            .filter(|record| record.matches_lowercase(&needle))
            .take(limit)
            .cloned()
            .collect())
    }
}
