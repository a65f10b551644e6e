//! Fan-out classification: one mapper per event kind.
//!
//! The fan-out task reads the shared event stream and hands each event to
//! the classifier for its kind. Each classifier maps its events to actions
//! and sends them into the merged action channel. Every hop waits for room
//! instead of dropping, so an accepted submit always reaches its runner.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::shutdown::ShutdownHandle;
use crate::ui::create_account::{AccountAction, AccountEvent, EmailChangedEvent, SubmitEvent};

/// Spawn the task that splits the shared event stream by kind.
pub fn spawn_fan_out(
    mut events: mpsc::UnboundedReceiver<AccountEvent>,
    submits: mpsc::Sender<SubmitEvent>,
    edits: mpsc::Sender<EmailChangedEvent>,
    shutdown: ShutdownHandle,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                event = events.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
            };

            let delivered = match event {
                AccountEvent::Submit(submit) => submits.send(submit).await.is_ok(),
                AccountEvent::EmailChanged(changed) => edits.send(changed).await.is_ok(),
            };
            if !delivered {
                break;
            }
        }
        tracing::debug!("Event fan-out stopped");
    })
}

/// Spawn one classifier task.
///
/// The fan-out has already narrowed events to this kind's payload, so
/// `map` is total over what it receives.
pub fn spawn_classifier<E>(
    name: &'static str,
    mut events: mpsc::Receiver<E>,
    map: fn(E) -> Option<AccountAction>,
    actions: mpsc::Sender<AccountAction>,
    shutdown: ShutdownHandle,
) -> JoinHandle<()>
where
    E: Send + 'static,
{
    tokio::spawn(async move {
        loop {
            let payload = tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                payload = events.recv() => match payload {
                    Some(payload) => payload,
                    None => break,
                },
            };

            let Some(action) = map(payload) else {
                tracing::trace!(classifier = name, "Event filtered out");
                continue;
            };
            tracing::debug!(classifier = name, ?action, "Action classified");
            if actions.send(action).await.is_err() {
                break;
            }
        }
        tracing::debug!(classifier = name, "Classifier stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shutdown::ShutdownCoordinator;
    use crate::ui::create_account::{map_email_changed, map_submit};

    #[tokio::test]
    async fn classifiers_merge_into_one_action_stream() {
        let coordinator = ShutdownCoordinator::new();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (submit_tx, submit_rx) = mpsc::channel(8);
        let (edit_tx, edit_rx) = mpsc::channel(8);
        let (actions_tx, mut actions_rx) = mpsc::channel(8);

        let fan_out = spawn_fan_out(events_rx, submit_tx, edit_tx, coordinator.handle());
        let submit = spawn_classifier(
            "submit",
            submit_rx,
            map_submit,
            actions_tx.clone(),
            coordinator.handle(),
        );
        let check = spawn_classifier(
            "check",
            edit_rx,
            map_email_changed,
            actions_tx,
            coordinator.handle(),
        );

        events_tx.send(AccountEvent::email_changed("")).expect("send");
        events_tx.send(AccountEvent::email_changed("abc")).expect("send");
        events_tx.send(AccountEvent::submit("a@b.com", "xyz")).expect("send");

        let mut received = vec![
            actions_rx.recv().await.expect("action"),
            actions_rx.recv().await.expect("action"),
        ];
        received.sort_by_key(|action| format!("{:?}", action));
        assert_eq!(
            received,
            vec![
                AccountAction::CheckEmail { email: "abc".into() },
                AccountAction::CreateUser {
                    email: "a@b.com".into(),
                    password: "xyz".into(),
                },
            ]
        );

        coordinator.signal();
        fan_out.await.expect("fan-out");
        submit.await.expect("submit classifier");
        check.await.expect("check classifier");
        assert!(actions_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn full_kind_channel_applies_backpressure_instead_of_dropping() {
        let coordinator = ShutdownCoordinator::new();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (submit_tx, mut submit_rx) = mpsc::channel(1);
        let (edit_tx, mut edit_rx) = mpsc::channel(1);

        let _fan_out = spawn_fan_out(events_rx, submit_tx, edit_tx, coordinator.handle());

        events_tx.send(AccountEvent::submit("a@b.com", "xyz")).expect("send");
        for n in 0..20 {
            events_tx
                .send(AccountEvent::email_changed(format!("user{n}")))
                .expect("send");
        }
        events_tx.send(AccountEvent::submit("c@d.com", "xyz")).expect("send");

        for n in 0..20 {
            assert_eq!(edit_rx.recv().await.expect("edit").text, format!("user{n}"));
        }
        assert_eq!(submit_rx.recv().await.expect("submit").email, "a@b.com");
        assert_eq!(submit_rx.recv().await.expect("submit").email, "c@d.com");
    }
}
