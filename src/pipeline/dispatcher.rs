//! Pipeline wiring and lifecycle.
//!
//! Builds the event source, the per-kind classifiers and effect runners,
//! merges every result into one channel, and runs the single fold that
//! produces states.

use std::sync::Arc;
use std::time::Duration;

use futures_core::Stream;
use parking_lot::Mutex;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::PipelineConfig;
use crate::service::UserService;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle, ShutdownPhase};
use crate::ui::create_account::{
    map_email_changed, map_submit, AccountAction, AccountEvent, AccountReducer, AccountResult,
    AccountState,
};
use crate::ui::mvi::Reducer;
use crate::ui::view::{render, AccountView};

use super::classify::{spawn_classifier, spawn_fan_out};
use super::effects::{CheckEmailRequest, CheckRunner, CreateUserRequest, SubmitRunner};
use super::source::{EventSource, ViewInput};

const STAGE_BUFFER: usize = 32;

/// Entry point for building a create-account pipeline.
pub struct Pipeline;

impl Pipeline {
    /// Wire and start every stage on the current Tokio runtime.
    ///
    /// Input is queued from the moment this returns, so nothing sent
    /// through the returned handle can be missed.
    pub fn spawn(service: Arc<dyn UserService>, config: &PipelineConfig) -> PipelineHandle {
        let coordinator = ShutdownCoordinator::new();
        let shutdown = coordinator.handle();
        let (source, events) = EventSource::new(shutdown.clone());

        let (submit_events_tx, submit_events_rx) = mpsc::channel(config.event_capacity);
        let (edit_events_tx, edit_events_rx) = mpsc::channel(config.event_capacity);
        let (actions_tx, actions_rx) = mpsc::channel(STAGE_BUFFER);
        let (submit_tx, submit_rx) = mpsc::channel(STAGE_BUFFER);
        let (check_tx, check_rx) = mpsc::channel(STAGE_BUFFER);
        let (results_tx, results_rx) = mpsc::channel(STAGE_BUFFER);
        let (states_tx, states_rx) = broadcast::channel(config.state_capacity);
        let (latest_tx, latest_rx) = watch::channel(AccountState::default());

        let mut tasks = Vec::new();

        tasks.push(spawn_fan_out(
            events,
            submit_events_tx,
            edit_events_tx,
            shutdown.clone(),
        ));
        tasks.push(spawn_classifier(
            "submit",
            submit_events_rx,
            map_submit,
            actions_tx.clone(),
            shutdown.clone(),
        ));
        tasks.push(spawn_classifier(
            "check",
            edit_events_rx,
            map_email_changed,
            actions_tx,
            shutdown.clone(),
        ));

        tasks.push(tokio::spawn(route_actions(
            actions_rx,
            submit_tx,
            check_tx,
            shutdown.clone(),
        )));

        let submit = SubmitRunner::new(
            Arc::clone(&service),
            results_tx.clone(),
            shutdown.clone(),
        );
        tasks.push(tokio::spawn(submit.run(submit_rx)));

        let check = CheckRunner::new(
            service,
            results_tx,
            shutdown.clone(),
            Duration::from_millis(config.check_debounce_ms),
            config.check_progress,
        );
        tasks.push(tokio::spawn(check.run(check_rx)));

        tasks.push(tokio::spawn(fold_states(
            results_rx,
            states_tx,
            latest_tx,
            shutdown,
        )));

        tracing::info!(
            debounce_ms = config.check_debounce_ms,
            check_progress = ?config.check_progress,
            "Create-account pipeline started"
        );

        PipelineHandle {
            input: source.input(),
            source,
            states: states_rx,
            latest: latest_rx,
            coordinator,
            tasks: Mutex::new(tasks),
        }
    }
}

/// Send each action to the runner for its kind.
async fn route_actions(
    mut actions: mpsc::Receiver<AccountAction>,
    submit: mpsc::Sender<CreateUserRequest>,
    check: mpsc::Sender<CheckEmailRequest>,
    shutdown: ShutdownHandle,
) {
    loop {
        let action = tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            action = actions.recv() => match action {
                Some(action) => action,
                None => break,
            },
        };

        let delivered = match action {
            AccountAction::CreateUser { email, password } => submit
                .send(CreateUserRequest { email, password })
                .await
                .is_ok(),
            AccountAction::CheckEmail { email } => {
                check.send(CheckEmailRequest { email }).await.is_ok()
            }
        };
        if !delivered {
            break;
        }
    }
}

/// The only writer of state: folds results in arrival order.
async fn fold_states(
    mut results: mpsc::Receiver<AccountResult>,
    states: broadcast::Sender<AccountState>,
    latest: watch::Sender<AccountState>,
    shutdown: ShutdownHandle,
) {
    let mut state = AccountState::default();
    loop {
        let result = tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            result = results.recv() => match result {
                Some(result) => result,
                None => break,
            },
        };

        state = AccountReducer::reduce(state, result);
        tracing::debug!(?state, "State updated");
        latest.send_replace(state.clone());
        // No subscribers is fine; `latest` still holds the value.
        let _ = states.send(state.clone());
    }
    tracing::debug!("State fold stopped");
}

/// A subscription to the shared state stream.
pub struct StateStream {
    receiver: broadcast::Receiver<AccountState>,
}

impl StateStream {
    /// Next state, or `None` once the pipeline is torn down.
    pub async fn next(&mut self) -> Option<AccountState> {
        loop {
            match self.receiver.recv().await {
                Ok(state) => return Some(state),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "State subscriber lagged; skipping to newest");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

/// Running pipeline. Dropping it tears everything down.
pub struct PipelineHandle {
    input: ViewInput,
    source: EventSource,
    states: broadcast::Receiver<AccountState>,
    latest: watch::Receiver<AccountState>,
    coordinator: ShutdownCoordinator,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl PipelineHandle {
    /// Input handle for the view.
    pub fn input(&self) -> ViewInput {
        self.input.clone()
    }

    /// Merge another raw origin into the event stream.
    pub fn attach_origin<S, T, F>(&self, origin: S, map: F)
    where
        S: Stream<Item = T> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> AccountEvent + Send + 'static,
    {
        let task = self.source.attach_origin(origin, map);
        self.tasks.lock().push(task);
    }

    /// Subscribe to every state produced from now on.
    pub fn subscribe(&self) -> StateStream {
        StateStream {
            receiver: self.states.resubscribe(),
        }
    }

    /// The most recent state.
    pub fn current(&self) -> AccountState {
        self.latest.borrow().clone()
    }

    /// Latest-value view of the state, for sinks that only care about now.
    pub fn watch(&self) -> watch::Receiver<AccountState> {
        self.latest.clone()
    }

    /// Drive `view` from the shared state stream on a dedicated task.
    ///
    /// When a state asks the view to dismiss, the screen is closed and the
    /// pipeline is torn down. The view is handed back when the task ends.
    pub fn bind_view<V: AccountView>(&self, mut view: V) -> JoinHandle<V> {
        let mut states = self.subscribe();
        let shutdown = self.coordinator.handle();
        tokio::spawn(async move {
            loop {
                let state = tokio::select! {
                    biased;
                    _ = shutdown.wait() => break,
                    state = states.next() => match state {
                        Some(state) => state,
                        None => break,
                    },
                };
                if render(&mut view, &state) {
                    tracing::info!("Screen dismissed");
                    shutdown.signal();
                    break;
                }
            }
            view
        })
    }

    pub fn is_closed(&self) -> bool {
        self.coordinator.is_shutting_down()
    }

    /// Tear the pipeline down and wait for every stage to stop.
    ///
    /// In-flight operations are aborted; no state is produced afterwards.
    pub async fn shutdown(&self) {
        self.coordinator.signal();
        self.coordinator.advance(ShutdownPhase::StoppingInput);
        let tasks = std::mem::take(&mut *self.tasks.lock());

        self.coordinator.advance(ShutdownPhase::CancellingEffects);
        for task in tasks {
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    tracing::error!(error = %err, "Pipeline stage panicked");
                }
            }
        }

        // The fold task owned the only state sender; subscribers now see the end.
        self.coordinator.advance(ShutdownPhase::ClosingStates);
        self.coordinator.advance(ShutdownPhase::Complete);
        tracing::info!("Create-account pipeline stopped");
    }
}

impl Drop for PipelineHandle {
    fn drop(&mut self) {
        self.coordinator.signal();
        for task in self.tasks.lock().drain(..) {
            task.abort();
        }
    }
}
