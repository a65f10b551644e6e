//! Base trait for effect outcomes in MVI architecture.

/// Marker trait for outcome objects.
///
/// An outcome reports one step of an effect (pending, done, failed).
/// Outcomes are the only input reducers accept.
pub trait Outcome: Send + 'static {}
