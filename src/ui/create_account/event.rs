//! Events emitted by the create-account view.

use std::fmt;

use crate::ui::mvi::UiEvent;

/// Discriminant of [`AccountEvent`], used by classifiers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    EmailChanged,
}

/// The create button was pressed. Carries the field values at that moment.
#[derive(Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SubmitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitEvent")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}

/// The email field's text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChangedEvent {
    pub text: String,
}

/// One occurrence of user input on the create-account screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    Submit(SubmitEvent),
    EmailChanged(EmailChangedEvent),
}

impl UiEvent for AccountEvent {}

impl AccountEvent {
    pub fn submit(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Submit(SubmitEvent {
            email: email.into(),
            password: password.into(),
        })
    }

    pub fn email_changed(text: impl Into<String>) -> Self {
        Self::EmailChanged(EmailChangedEvent { text: text.into() })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Submit(_) => EventKind::Submit,
            Self::EmailChanged(_) => EventKind::EmailChanged,
        }
    }
}
