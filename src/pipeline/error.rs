//! Error types for pipeline wiring.

use thiserror::Error;

/// Errors reported to callers of the pipeline surface.
///
/// Domain failures never appear here; they travel as error states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The pipeline was torn down; input is no longer accepted.
    #[error("Pipeline is closed")]
    Closed,
}
