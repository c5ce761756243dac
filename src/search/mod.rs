//! Text-driven search: the engine contract, a reference catalog, and the
//! broadcaster that turns query changes into published UI state.

mod broadcaster;
mod catalog;
mod engine;
mod intent;
mod reducer;
mod state;

pub use broadcaster::{ListenerId, QueryTicket, StateReceiver, UiStateBroadcaster};
pub use catalog::Catalog;
pub use engine::{SearchEngine, SearchError};
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchUiState;
