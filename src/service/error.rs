//! Error types for the user service.

use thiserror::Error;

/// Failures reported by a [`UserService`](super::UserService).
///
/// These are domain failures: the pipeline turns them into an error state
/// and keeps accepting input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Password rejected by the account rules.
    #[error("invalidPassword")]
    InvalidPassword,

    /// The service could not be reached or gave up.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
