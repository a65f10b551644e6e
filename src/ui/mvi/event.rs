//! Base trait for view events in MVI architecture.

/// Marker trait for event objects.
///
/// Events are produced by the view at the moment input occurs and are
/// shared by every classifier, so they must be cheap to clone.
pub trait UiEvent: Clone + Send + 'static {}
