use crate::mvi::Reducer;
use crate::recent::intent::RecentIntent;
use crate::recent::state::RecentList;

pub struct RecentReducer;

impl Reducer for RecentReducer {
    type State = RecentList;
    type Intent = RecentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RecentIntent::Select(location) => {
                let mut state = state;
                state.promote(location);
                state
            }
            RecentIntent::Remove(location) => {
                let mut state = state;
                state.discard(&location);
                state
            }
            RecentIntent::Restore(entries) => RecentList::from_entries(entries),
        }
    }
}
