//! Base trait for intents (actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent what the user asked for, stripped of the shape of the
/// UI event that carried it:
/// - Submitting a form
/// - Asking whether a value is acceptable
///
/// Intents are executed by effect runners to produce outcomes.
pub trait Intent: Send + 'static {}
