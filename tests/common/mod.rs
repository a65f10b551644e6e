//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_core::Stream;
use rxstate::pipeline::StateStream;
use rxstate::service::{ServiceError, User, UserService};
use rxstate::ui::create_account::AccountState;
use rxstate::ui::view::{AccountView, ViewCommand};

/// One observable interaction with [`ScriptedService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateStarted(String),
    CreateFinished(String),
    CheckStarted(String),
    CheckFinished(String),
}

/// User service whose latency and failures are scripted per email.
///
/// `create_user` waits out the scripted latency before applying the
/// password rule, so failing and succeeding submits can be overlapped.
#[derive(Default)]
pub struct ScriptedService {
    latencies: HashMap<String, Duration>,
    failing_checks: HashSet<String>,
    log: Mutex<Vec<Call>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, email: &str, millis: u64) -> Self {
        self.latencies
            .insert(email.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn with_failing_check(mut self, email: &str) -> Self {
        self.failing_checks.insert(email.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().clone()
    }

    pub fn checks_started(&self) -> Vec<String> {
        self.log
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::CheckStarted(email) => Some(email.clone()),
                _ => None,
            })
            .collect()
    }

    async fn delay(&self, email: &str) {
        if let Some(latency) = self.latencies.get(email) {
            tokio::time::sleep(*latency).await;
        }
    }
}

#[async_trait]
impl UserService for ScriptedService {
    async fn create_user(&self, email: String, password: String) -> Result<User, ServiceError> {
        self.log.lock().push(Call::CreateStarted(email.clone()));
        self.delay(&email).await;
        self.log.lock().push(Call::CreateFinished(email.clone()));
        if password.chars().count() < 3 {
            return Err(ServiceError::InvalidPassword);
        }
        Ok(User::new(email, &password))
    }

    async fn check_email(&self, email: String) -> Result<bool, ServiceError> {
        self.log.lock().push(Call::CheckStarted(email.clone()));
        self.delay(&email).await;
        self.log.lock().push(Call::CheckFinished(email.clone()));
        if self.failing_checks.contains(&email) {
            return Err(ServiceError::Unavailable("down".to_string()));
        }
        Ok(true)
    }
}

/// View that records every command it is asked to apply.
#[derive(Default)]
pub struct RecordingView {
    pub commands: Vec<ViewCommand>,
}

impl AccountView for RecordingView {
    fn apply(&mut self, command: ViewCommand) {
        self.commands.push(command);
    }
}

/// Stream over a fixed list of items.
pub struct ListStream<T>(pub Vec<T>);

impl<T: Unpin> Stream for ListStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<T>> {
        if self.0.is_empty() {
            Poll::Ready(None)
        } else {
            Poll::Ready(Some(self.0.remove(0)))
        }
    }
}

/// Collect exactly `count` states, failing if they take too long.
pub async fn take_states(stream: &mut StateStream, count: usize) -> Vec<AccountState> {
    let mut states = Vec::with_capacity(count);
    for _ in 0..count {
        let state = tokio::time::timeout(Duration::from_secs(60), stream.next())
            .await
            .expect("timed out waiting for state")
            .expect("state stream ended early");
        states.push(state);
    }
    states
}

/// Assert that no further state arrives within `millis`.
pub async fn assert_quiet(stream: &mut StateStream, millis: u64) {
    let next = tokio::time::timeout(Duration::from_millis(millis), stream.next()).await;
    assert!(next.is_err(), "unexpected state: {:?}", next);
}
