use crate::location::LocationRecord;
use crate::mvi::UiState;

/// Snapshot published to listeners after every query change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchUiState {
    /// Query text exactly as typed.
    pub query: String,
    pub matches: Vec<LocationRecord>,
    /// True when a non-blank query succeeded with no matches.
    pub show_empty_indicator: bool,
    /// Set when the engine failed; matches are empty and the indicator is off.
    pub error: Option<String>,
    /// Stamp of the query that produced this snapshot. Zero before any query.
    pub generation: u64,
}

impl UiState for SearchUiState {}

impl SearchUiState {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
