//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents describe what happened (a query changed, a record was tapped,
/// a chip was dismissed, results arrived) and are consumed by reducers.
pub trait Intent: Send + 'static {}
