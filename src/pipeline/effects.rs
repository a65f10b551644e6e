//! Effect runners: one per action kind, each with its own policy.
//!
//! - Submit: concurrent. Every request runs to completion and results are
//!   emitted in completion order.
//! - Check: debounced, then switch-to-latest. Only the newest request's
//!   result is ever emitted.
//!
//! Service failures become error outcomes here and never end a runner.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::CheckProgress;
use crate::service::{User, UserService};
use crate::shutdown::ShutdownHandle;
use crate::ui::create_account::{AccountResult, Progress};

use super::debounce::Debouncer;
use super::switch_latest::SwitchSlot;

/// Request handed to the submit runner.
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

/// Request handed to the check runner.
pub struct CheckEmailRequest {
    pub email: String,
}

fn panic_message(err: &JoinError) -> String {
    format!("Operation failed unexpectedly: {}", err)
}

/// Runs create-user operations concurrently.
pub struct SubmitRunner {
    service: Arc<dyn UserService>,
    results: mpsc::Sender<AccountResult>,
    shutdown: ShutdownHandle,
}

impl SubmitRunner {
    pub fn new(
        service: Arc<dyn UserService>,
        results: mpsc::Sender<AccountResult>,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            service,
            results,
            shutdown,
        }
    }

    pub async fn run(self, mut requests: mpsc::Receiver<CreateUserRequest>) {
        let mut in_flight: JoinSet<Progress<User>> = JoinSet::new();
        let mut accepting = true;

        loop {
            if !accepting && in_flight.is_empty() {
                break;
            }

            let outcome = tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                request = requests.recv(), if accepting => match request {
                    Some(request) => {
                        // Progress goes out before the operation is started.
                        if self.emit(Progress::InProgress).await.is_err() {
                            break;
                        }
                        self.start(&mut in_flight, request);
                        continue;
                    }
                    None => {
                        accepting = false;
                        continue;
                    }
                },
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => joined,
            };

            let progress = match outcome {
                Ok(progress) => progress,
                Err(err) if err.is_cancelled() => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Create-user operation panicked");
                    Progress::Error(panic_message(&err))
                }
            };
            if self.emit(progress).await.is_err() {
                break;
            }
        }

        if !in_flight.is_empty() {
            tracing::debug!(
                pending = in_flight.len(),
                "Aborting in-flight create-user operations"
            );
        }
        in_flight.abort_all();
    }

    fn start(&self, in_flight: &mut JoinSet<Progress<User>>, request: CreateUserRequest) {
        let service = Arc::clone(&self.service);
        let op_id = Uuid::new_v4();
        let span = tracing::info_span!("create_user", %op_id, email = %request.email);
        in_flight.spawn(
            async move {
                tracing::debug!("Operation started");
                let result = service.create_user(request.email, request.password).await;
                match &result {
                    Ok(_) => tracing::info!("Account created"),
                    Err(err) => tracing::warn!(error = %err, "Account creation failed"),
                }
                Progress::from(result)
            }
            .instrument(span),
        );
    }

    async fn emit(&self, progress: Progress<User>) -> Result<(), ()> {
        self.results
            .send(AccountResult::Submit(progress))
            .await
            .map_err(|_| ())
    }
}

/// Runs email checks behind a debounce with switch-to-latest semantics.
pub struct CheckRunner {
    service: Arc<dyn UserService>,
    results: mpsc::Sender<AccountResult>,
    shutdown: ShutdownHandle,
    quiet: Duration,
    progress: CheckProgress,
}

impl CheckRunner {
    pub fn new(
        service: Arc<dyn UserService>,
        results: mpsc::Sender<AccountResult>,
        shutdown: ShutdownHandle,
        quiet: Duration,
        progress: CheckProgress,
    ) -> Self {
        Self {
            service,
            results,
            shutdown,
            quiet,
            progress,
        }
    }

    pub async fn run(self, mut requests: mpsc::Receiver<CheckEmailRequest>) {
        let mut debouncer = Debouncer::new(self.quiet);
        let mut slot = SwitchSlot::new();
        let mut in_flight: JoinSet<Progress<bool>> = JoinSet::new();
        let mut accepting = true;

        loop {
            if !accepting && !debouncer.is_pending() && in_flight.is_empty() {
                break;
            }

            let wake = debouncer.deadline();
            tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                request = requests.recv(), if accepting => match request {
                    Some(request) => {
                        if slot.cancel() {
                            tracing::debug!("In-flight email check superseded");
                        }
                        if debouncer.push(request.email, Instant::now()).is_some() {
                            tracing::trace!("Debounce window restarted");
                        }
                        if self.progress == CheckProgress::Immediate
                            && self.emit(Progress::InProgress).await.is_err()
                        {
                            break;
                        }
                    }
                    None => accepting = false,
                },
                _ = tokio::time::sleep_until(wake.unwrap_or_else(Instant::now)), if wake.is_some() => {
                    let Some(email) = debouncer.take_due(Instant::now()) else {
                        continue;
                    };
                    if self.progress == CheckProgress::AfterDebounce
                        && self.emit(Progress::InProgress).await.is_err()
                    {
                        break;
                    }
                    let handle = self.start(&mut in_flight, email);
                    slot.replace(handle);
                }
                Some(joined) = in_flight.join_next_with_id(), if !in_flight.is_empty() => {
                    let progress = match joined {
                        Ok((id, progress)) => {
                            if !slot.settle(id) {
                                tracing::debug!("Dropping result of superseded email check");
                                continue;
                            }
                            progress
                        }
                        Err(err) if err.is_cancelled() => continue,
                        Err(err) => {
                            if !slot.settle(err.id()) {
                                continue;
                            }
                            tracing::error!(error = %err, "Email check panicked");
                            Progress::Error(panic_message(&err))
                        }
                    };
                    if self.emit(progress).await.is_err() {
                        break;
                    }
                }
            }
        }

        debouncer.cancel();
        slot.cancel();
        in_flight.abort_all();
    }

    fn start(
        &self,
        in_flight: &mut JoinSet<Progress<bool>>,
        email: String,
    ) -> tokio::task::AbortHandle {
        let service = Arc::clone(&self.service);
        let op_id = Uuid::new_v4();
        let span = tracing::debug_span!("check_email", %op_id, email = %email);
        in_flight.spawn(
            async move {
                tracing::debug!("Operation started");
                let result = service.check_email(email).await;
                match &result {
                    Ok(available) => tracing::debug!(available, "Email checked"),
                    Err(err) => tracing::warn!(error = %err, "Email check failed"),
                }
                Progress::from(result)
            }
            .instrument(span),
        )
    }

    async fn emit(&self, progress: Progress<bool>) -> Result<(), ()> {
        self.results
            .send(AccountResult::Check(progress))
            .await
            .map_err(|_| ())
    }
}
