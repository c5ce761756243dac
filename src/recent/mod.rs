//! Recent-selection list: state machine, blob codec and owning manager.

pub mod codec;
mod intent;
mod manager;
mod reducer;
mod state;

pub use codec::CodecError;
pub use intent::RecentIntent;
pub use manager::{
    PersistError, RecentListManager, RemoveOutcome, SelectOutcome, DEFAULT_RECENT_KEY,
};
pub use reducer::RecentReducer;
pub use state::RecentList;
