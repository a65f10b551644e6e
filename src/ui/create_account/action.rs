//! Intents for the create-account screen and the mappers that produce them.

use std::fmt;

use crate::ui::mvi::Intent;

use super::event::{EmailChangedEvent, SubmitEvent};

/// Intents that can be dispatched to the effect runners.
#[derive(Clone, PartialEq, Eq)]
pub enum AccountAction {
    /// Create an account with these credentials.
    CreateUser { email: String, password: String },

    /// Ask whether this email can still be registered.
    CheckEmail { email: String },
}

impl Intent for AccountAction {}

impl fmt::Debug for AccountAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateUser { email, .. } => f
                .debug_struct("CreateUser")
                .field("email", email)
                .field("password", &"****")
                .finish(),
            Self::CheckEmail { email } => {
                f.debug_struct("CheckEmail").field("email", email).finish()
            }
        }
    }
}

/// Map a submit press to a create-user action. Every press counts.
pub fn map_submit(event: SubmitEvent) -> Option<AccountAction> {
    Some(AccountAction::CreateUser {
        email: event.email,
        password: event.password,
    })
}

/// Map an email edit to a check action.
///
/// Blank text does not warrant a check and yields `None`.
pub fn map_email_changed(event: EmailChangedEvent) -> Option<AccountAction> {
    if event.text.trim().is_empty() {
        return None;
    }
    Some(AccountAction::CheckEmail { email: event.text })
}
