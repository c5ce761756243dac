//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use locsearch::LocationRecord;
use std::path::PathBuf;
use tempfile::TempDir;

/// A record whose fields are all derived from `name`.
pub fn place(name: &str) -> LocationRecord {
    LocationRecord::new(
        name,
        format!("{name} street, Seoul"),
        "cafe",
        37.5 + name.len() as f64 * 0.001,
        127.0,
    )
}

pub fn names(records: &[LocationRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

/// Write a JSON catalog file with the given records into a fresh temp dir.
pub fn temp_catalog(records: &[LocationRecord]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    let json = serde_json::to_string(records).expect("Failed to encode catalog");
    std::fs::write(&path, json).expect("Failed to write catalog");
    (temp_dir, path)
}
