use crate::location::LocationRecord;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// The engine answered the query stamped `generation`.
    ResultsArrived {
        generation: u64,
        query: String,
        matches: Vec<LocationRecord>,
    },
    /// The engine failed for the query stamped `generation`.
    Failed {
        generation: u64,
        query: String,
        error: String,
    },
}

impl Intent for SearchIntent {}
