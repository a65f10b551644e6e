//! Event source: one shared, hot stream of view events.
//!
//! Every raw origin maps its input to an [`AccountEvent`] at the point of
//! occurrence and queues it on a single channel. One fan-out task reads
//! that channel and hands each event to the reader for its kind, so
//! classifying by kind never re-triggers an origin. Nothing is dropped.

use std::future::poll_fn;

use futures_core::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::shutdown::ShutdownHandle;
use crate::ui::create_account::AccountEvent;

use super::error::PipelineError;

/// Owner of the shared event channel.
#[derive(Clone)]
pub struct EventSource {
    sender: mpsc::UnboundedSender<AccountEvent>,
    shutdown: ShutdownHandle,
}

impl EventSource {
    /// Create the source and the single reader of its events.
    pub fn new(shutdown: ShutdownHandle) -> (Self, mpsc::UnboundedReceiver<AccountEvent>) {
        let (sender, events) = mpsc::unbounded_channel();
        (Self { sender, shutdown }, events)
    }

    /// Input handle handed to the view.
    pub fn input(&self) -> ViewInput {
        ViewInput {
            sender: self.sender.clone(),
            shutdown: self.shutdown.clone(),
        }
    }

    /// Forward an independent raw origin into the shared stream.
    ///
    /// The forwarder stops when the origin ends or the pipeline is torn
    /// down; the event stream itself keeps running either way.
    pub fn attach_origin<S, T, F>(&self, origin: S, map: F) -> JoinHandle<()>
    where
        S: Stream<Item = T> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> AccountEvent + Send + 'static,
    {
        let input = self.input();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut origin = Box::pin(origin);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.wait() => break,
                    item = poll_fn(|cx| origin.as_mut().poll_next(cx)) => match item {
                        Some(raw) => {
                            if input.emit(map(raw)).is_err() {
                                break;
                            }
                        }
                        None => {
                            tracing::debug!("Event origin finished");
                            break;
                        }
                    },
                }
            }
        })
    }
}

/// The view's side of the pipeline: raw interactions in, nothing out.
#[derive(Clone)]
pub struct ViewInput {
    sender: mpsc::UnboundedSender<AccountEvent>,
    shutdown: ShutdownHandle,
}

impl ViewInput {
    /// The create button was pressed with the current field values.
    pub fn submit_pressed(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), PipelineError> {
        self.emit(AccountEvent::submit(email, password))
    }

    /// The email field now holds `text`.
    pub fn email_changed(&self, text: impl Into<String>) -> Result<(), PipelineError> {
        self.emit(AccountEvent::email_changed(text))
    }

    pub fn emit(&self, event: AccountEvent) -> Result<(), PipelineError> {
        if self.shutdown.is_shutting_down() {
            return Err(PipelineError::Closed);
        }
        tracing::trace!(kind = ?event.kind(), "Event received");
        self.sender.send(event).map_err(|_| PipelineError::Closed)
    }
}
