//! Base trait for state snapshots.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to hand a copy to listeners)
/// - Self-contained (everything a listener needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
