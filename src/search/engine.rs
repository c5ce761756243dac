use std::path::PathBuf;

use thiserror::Error;

use crate::location::LocationRecord;

/// Errors a search engine can report. The broadcaster turns them into an
/// error-flagged state instead of failing the pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search engine unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read catalog '{path}': {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Text-match lookup over a location catalog.
///
/// Blank text must yield an empty sequence.
pub trait SearchEngine: Send + Sync {
    fn query(&self, text: &str) -> Result<Vec<LocationRecord>, SearchError>;
}

impl<F> SearchEngine for F
where
    F: Fn(&str) -> Result<Vec<LocationRecord>, SearchError> + Send + Sync,
{
    fn query(&self, text: &str) -> Result<Vec<LocationRecord>, SearchError> {
        self(text)
    }
}
