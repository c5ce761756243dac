//! Model-View-Intent (MVI) primitives shared by the search and recent-list
//! state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Listener
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot handed to listeners
//! - **Intent**: a user action (typing, tapping, dismissing) or a search result
//! - **Reducer**: pure `(State, Intent) -> State`; persistence, publication
//!   and logging stay with the owner of the state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
