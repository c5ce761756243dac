//! Owner of the recent list and its blob round-trip.

use std::sync::Arc;

use thiserror::Error;

use crate::location::LocationRecord;
use crate::mvi::Reducer;
use crate::recent::codec::{self, CodecError};
use crate::recent::intent::RecentIntent;
use crate::recent::reducer::RecentReducer;
use crate::recent::state::RecentList;
use crate::store::{BlobStore, StoreError};

/// Key the recent list is stored under unless configured otherwise.
pub const DEFAULT_RECENT_KEY: &str = "search_list";

/// Errors from writing the recent list. Recorded and logged, never returned.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What `select` did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The location was new and now sits at index 0.
    Inserted,
    /// The location was at `from` and moved to index 0.
    MovedToFront { from: usize },
    /// The location was already the most recent entry; nothing changed.
    AlreadyMostRecent,
}

impl SelectOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::AlreadyMostRecent)
    }
}

/// What `remove` did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry at `index` was deleted. `now_empty` tells the caller to hide
    /// the recent strip.
    Removed { index: usize, now_empty: bool },
    /// The location was not in the list.
    NotFound,
}

impl RemoveOutcome {
    pub fn now_empty(&self) -> bool {
        matches!(self, Self::Removed { now_empty: true, .. })
    }
}

/// Generic dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Maintains the most-recently-selected locations.
///
/// Mutations take `&mut self`, so all reads and writes of the list are
/// serialized through the manager. Every structural change rewrites the
/// whole blob. Storage failures are logged and recorded but the in-memory
/// list stays authoritative.
pub struct RecentListManager {
    list: RecentList,
    store: Arc<dyn BlobStore>,
    key: String,
    last_persist_error: Option<PersistError>,
}

impl RecentListManager {
    /// Restore the list stored under `key`.
    ///
    /// A missing blob, a corrupt blob and an unreadable store all yield an
    /// empty list.
    pub fn open(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        let mut manager = Self {
            list: RecentList::default(),
            store,
            key: key.into(),
            last_persist_error: None,
        };
        manager.load();
        manager
    }

    fn load(&mut self) {
        let blob = match self.store.load(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored recent list");
                return;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read recent list, starting empty");
                return;
            }
        };

        match codec::decode(&blob) {
            Ok(entries) => {
                dispatch_mvi!(self, list, RecentReducer, RecentIntent::Restore(entries));
                tracing::debug!(
                    key = %self.key,
                    size = self.list.len(),
                    strip_visible = self.is_strip_visible(),
                    "Recent list restored"
                );
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding malformed recent list");
            }
        }
    }

    /// Record a tap on `location`.
    pub fn select(&mut self, location: LocationRecord) -> SelectOutcome {
        let outcome = match self.list.position(&location) {
            None => SelectOutcome::Inserted,
            Some(0) => SelectOutcome::AlreadyMostRecent,
            Some(from) => SelectOutcome::MovedToFront { from },
        };
        tracing::debug!(name = %location.name, ?outcome, "Location selected");

        if outcome.changed() {
            dispatch_mvi!(self, list, RecentReducer, RecentIntent::Select(location));
            self.persist();
        }
        outcome
    }

    /// Dismiss `location` from the list.
    pub fn remove(&mut self, location: &LocationRecord) -> RemoveOutcome {
        let Some(index) = self.list.position(location) else {
            tracing::debug!(name = %location.name, "Remove ignored, location not in recent list");
            return RemoveOutcome::NotFound;
        };

        dispatch_mvi!(self, list, RecentReducer, RecentIntent::Remove(location.clone()));
        self.persist();

        let now_empty = self.list.is_empty();
        if now_empty {
            tracing::debug!("Recent list is now empty");
        }
        RemoveOutcome::Removed { index, now_empty }
    }

    /// Copy of the current list, most recent first.
    pub fn snapshot(&self) -> Vec<LocationRecord> {
        self.list.entries().to_vec()
    }

    /// Borrow the current list state.
    pub fn list(&self) -> &RecentList {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Whether the recent strip should be shown.
    pub fn is_strip_visible(&self) -> bool {
        !self.list.is_empty()
    }

    /// First entry whose name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&LocationRecord> {
        self.list.entries().iter().find(|entry| entry.name == name)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The failure of the most recent write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&PersistError> {
        self.last_persist_error.as_ref()
    }

    /// Wait for queued writes to reach the store.
    ///
    /// A background write failure is logged and recorded like any other
    /// persist failure.
    pub fn flush(&mut self) {
        if let Err(e) = self.store.flush() {
            tracing::warn!(key = %self.key, error = %e, "Queued recent list write failed");
            self.last_persist_error = Some(e.into());
        }
    }

    fn persist(&mut self) {
        let result = codec::encode(self.list.entries())
            .map_err(PersistError::from)
            .and_then(|blob| {
                self.store
                    .save(&self.key, &blob)
                    .map_err(PersistError::from)
            });

        match result {
            Ok(()) => {
                tracing::info!(key = %self.key, size = self.list.len(), "Recent list saved");
                self.last_persist_error = None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save recent list");
                self.last_persist_error = Some(e);
            }
        }
    }
}
