//! Location search with a deduplicated, persisted list of recent selections.
//!
//! - [`search`]: the engine contract, a reference [`search::Catalog`] and the
//!   [`search::UiStateBroadcaster`] that republishes query results as
//!   [`search::SearchUiState`] snapshots.
//! - [`recent`]: the move-to-front recent list and its owning
//!   [`recent::RecentListManager`].
//! - [`store`]: whole-blob persistence behind [`store::BlobStore`].

pub mod cli;
pub mod config;
pub mod location;
pub mod logging;
pub mod mvi;
pub mod recent;
pub mod search;
pub mod store;

pub use location::LocationRecord;
pub use recent::{RecentListManager, RemoveOutcome, SelectOutcome};
pub use search::{Catalog, SearchEngine, SearchError, SearchUiState, UiStateBroadcaster};
