//! In-process stand-in for the account backend.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ServiceConfig;

use super::error::ServiceError;
use super::user::User;
use super::UserService;

/// Simulated backend.
///
/// `create_user` rejects short passwords right away and otherwise answers
/// after `create_latency`. `check_email` reports every address as free.
#[derive(Debug, Clone)]
pub struct SimulatedUserService {
    create_latency: Duration,
    check_latency: Duration,
    min_password_len: usize,
}

impl SimulatedUserService {
    pub fn new(create_latency: Duration, check_latency: Duration, min_password_len: usize) -> Self {
        Self {
            create_latency,
            check_latency,
            min_password_len,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            Duration::from_millis(config.create_latency_ms),
            Duration::from_millis(config.check_latency_ms),
            config.min_password_len,
        )
    }
}

impl Default for SimulatedUserService {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}

#[async_trait]
impl UserService for SimulatedUserService {
    async fn create_user(&self, email: String, password: String) -> Result<User, ServiceError> {
        if password.chars().count() < self.min_password_len {
            return Err(ServiceError::InvalidPassword);
        }
        tokio::time::sleep(self.create_latency).await;
        Ok(User::new(email, &password))
    }

    async fn check_email(&self, email: String) -> Result<bool, ServiceError> {
        if !self.check_latency.is_zero() {
            tokio::time::sleep(self.check_latency).await;
        }
        tracing::trace!(email = %email, "Email reported available");
        Ok(true)
    }
}
