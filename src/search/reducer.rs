use crate::mvi::Reducer;
use crate::search::intent::SearchIntent;
use crate::search::state::SearchUiState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchUiState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::ResultsArrived { generation, .. }
            | SearchIntent::Failed { generation, .. }
                if generation < state.generation =>
            {
                // Older than what listeners already saw.
                state
            }
            SearchIntent::ResultsArrived {
                generation,
                query,
                matches,
            } => {
                let show_empty_indicator = !query.trim().is_empty() && matches.is_empty();
                SearchUiState {
                    query,
                    matches,
                    show_empty_indicator,
                    error: None,
                    generation,
                }
            }
            SearchIntent::Failed {
                generation,
                query,
                error,
            } => SearchUiState {
                query,
                matches: Vec::new(),
                show_empty_indicator: false,
                error: Some(error),
                generation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationRecord;

    fn arrived(generation: u64, query: &str, matches: Vec<LocationRecord>) -> SearchIntent {
        SearchIntent::ResultsArrived {
            generation,
            query: query.to_string(),
            matches,
        }
    }

    #[test]
    fn empty_query_hides_indicator() {
        let state = SearchReducer::reduce(SearchUiState::default(), arrived(1, "", vec![]));
        assert!(state.matches.is_empty());
        assert!(!state.show_empty_indicator);
    }

    #[test]
    fn blank_query_hides_indicator() {
        let state = SearchReducer::reduce(SearchUiState::default(), arrived(1, "   ", vec![]));
        assert!(!state.show_empty_indicator);
    }

    #[test]
    fn unmatched_query_shows_indicator() {
        let state =
            SearchReducer::reduce(SearchUiState::default(), arrived(1, "zz-no-match", vec![]));
        assert!(state.show_empty_indicator);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn matches_hide_indicator() {
        let record = LocationRecord::new("Cafe 1", "addr", "cafe", 0.0, 0.0);
        let state = SearchReducer::reduce(SearchUiState::default(), arrived(1, "cafe", vec![record]));
        assert_eq!(state.matches.len(), 1);
        assert!(!state.show_empty_indicator);
    }

    #[test]
    fn failure_suppresses_indicator() {
        let state = SearchReducer::reduce(
            SearchUiState::default(),
            SearchIntent::Failed {
                generation: 1,
                query: "cafe".to_string(),
                error: "catalog offline".to_string(),
            },
        );
        assert!(state.is_failed());
        assert!(!state.show_empty_indicator);
        assert!(state.matches.is_empty());
    }

    #[test]
    fn older_generation_is_ignored() {
        let current = SearchReducer::reduce(SearchUiState::default(), arrived(5, "ab", vec![]));
        let next = SearchReducer::reduce(current.clone(), arrived(4, "a", vec![]));
        assert_eq!(next, current);
    }
}
