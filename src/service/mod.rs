//! User service collaborator.
//!
//! The pipeline only sees the [`UserService`] trait. The simulated
//! implementation stands in for a network backend with configurable latency.

mod error;
mod simulated;
mod user;

use async_trait::async_trait;

pub use error::ServiceError;
pub use simulated::SimulatedUserService;
pub use user::{Credential, User};

/// Asynchronous account operations consumed by the effect runners.
///
/// Implementations may suspend for as long as they like; the pipeline runs
/// each call on its own task and cancels check calls that were superseded.
#[async_trait]
pub trait UserService: Send + Sync + 'static {
    /// Create an account. Irreversible from the pipeline's point of view.
    async fn create_user(&self, email: String, password: String) -> Result<User, ServiceError>;

    /// Report whether `email` is still free to register.
    async fn check_email(&self, email: String) -> Result<bool, ServiceError>;
}
