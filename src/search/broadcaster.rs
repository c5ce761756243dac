//! Query-to-state pipeline with publish/subscribe delivery.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::location::LocationRecord;
use crate::mvi::Reducer;
use crate::search::engine::{SearchEngine, SearchError};
use crate::search::intent::SearchIntent;
use crate::search::reducer::SearchReducer;
use crate::search::state::SearchUiState;

/// Latest-value receiver. A slow reader only ever observes the newest state.
pub type StateReceiver = watch::Receiver<SearchUiState>;

/// Handle returned by [`UiStateBroadcaster::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A query that has been stamped but not answered yet.
///
/// Only the most recently issued ticket can publish; every later
/// `begin_query` makes the earlier tickets stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    query: String,
}

impl QueryTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

struct Listener {
    id: ListenerId,
    callback: Arc<dyn Fn(&SearchUiState) + Send + Sync>,
    delivered: AtomicU64,
}

/// Runs queries against a [`SearchEngine`] and republishes the outcome as a
/// [`SearchUiState`] to every registered listener.
pub struct UiStateBroadcaster {
    engine: Arc<dyn SearchEngine>,
    latest: AtomicU64,
    state: Mutex<SearchUiState>,
    sender: watch::Sender<SearchUiState>,
    listeners: Mutex<Vec<Arc<Listener>>>,
    next_listener: AtomicU64,
}

impl UiStateBroadcaster {
    pub fn new(engine: Arc<dyn SearchEngine>) -> Self {
        let (sender, _) = watch::channel(SearchUiState::default());
        Self {
            engine,
            latest: AtomicU64::new(0),
            state: Mutex::new(SearchUiState::default()),
            sender,
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(1),
        }
    }

    /// Text-change entry point. Runs the engine synchronously and publishes.
    ///
    /// Returns the latest published state, which is this query's state unless
    /// a newer query completed in the meantime.
    pub fn on_query_changed(&self, text: &str) -> SearchUiState {
        let ticket = self.begin_query(text);
        let result = self.engine.query(text);
        self.complete_query(ticket, result);
        self.current()
    }

    /// Cancel-button path: re-run the empty query.
    pub fn clear(&self) -> SearchUiState {
        self.on_query_changed("")
    }

    /// Stamp a new query. Any earlier in-flight ticket becomes stale.
    pub fn begin_query(&self, text: &str) -> QueryTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(generation, query = %text, "Query started");
        QueryTicket {
            generation,
            query: text.to_string(),
        }
    }

    /// Publish the result of `ticket` unless a newer query has been started.
    ///
    /// Returns `false` when the result was discarded as stale.
    pub fn complete_query(
        &self,
        ticket: QueryTicket,
        result: Result<Vec<LocationRecord>, SearchError>,
    ) -> bool {
        if ticket.generation != self.latest.load(Ordering::SeqCst) {
            tracing::debug!(
                generation = ticket.generation,
                query = %ticket.query,
                "Discarding stale search result"
            );
            return false;
        }

        let intent = match result {
            Ok(matches) => SearchIntent::ResultsArrived {
                generation: ticket.generation,
                query: ticket.query,
                matches,
            },
            Err(e) => {
                tracing::warn!(query = %ticket.query, error = %e, "Search failed");
                SearchIntent::Failed {
                    generation: ticket.generation,
                    query: ticket.query,
                    error: e.to_string(),
                }
            }
        };

        let published = {
            let mut state = self.state.lock();
            let next = SearchReducer::reduce(state.clone(), intent);
            if next.generation != ticket.generation {
                return false;
            }
            *state = next.clone();
            self.sender.send_replace(next.clone());
            next
        };

        tracing::debug!(
            generation = published.generation,
            matches = published.matches.len(),
            show_empty_indicator = published.show_empty_indicator,
            "Search state published"
        );
        self.notify(&published);
        true
    }

    /// Run an asynchronous search for `text`, publishing only if no newer
    /// query was started while it was in flight.
    pub async fn on_query_changed_with<F>(&self, text: &str, search: F) -> bool
    where
        F: Future<Output = Result<Vec<LocationRecord>, SearchError>>,
    {
        let ticket = self.begin_query(text);
        let result = search.await;
        self.complete_query(ticket, result)
    }

    /// Latest published state.
    pub fn current(&self) -> SearchUiState {
        self.state.lock().clone()
    }

    /// Latest-value subscription. Dropping the receiver unsubscribes it.
    pub fn subscribe(&self) -> StateReceiver {
        self.sender.subscribe()
    }

    /// Register a callback invoked synchronously on every publish.
    pub fn add_listener<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&SearchUiState) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().push(Arc::new(Listener {
            id,
            callback: Arc::new(callback),
            delivered: AtomicU64::new(0),
        }));
        id
    }

    /// Deregister a callback. Returns `false` if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn notify(&self, state: &SearchUiState) {
        // Deliver to a snapshot so callbacks may (de)register listeners.
        let listeners: Vec<Arc<Listener>> = self.listeners.lock().clone();
        for listener in listeners {
            let previous = listener
                .delivered
                .fetch_max(state.generation, Ordering::SeqCst);
            if state.generation < previous {
                continue;
            }
            (listener.callback)(state);
        }
    }
}
