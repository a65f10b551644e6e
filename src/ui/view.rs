//! Presentation contract for the create-account screen.
//!
//! The view never branches on state itself: [`render_commands`] turns a
//! state into the widget updates to apply.

use crate::ui::create_account::AccountState;

/// One change to apply to the screen's widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetInputsEnabled(bool),
    SetProgressVisible(bool),
    ShowError(String),
    /// Close the screen.
    Dismiss,
}

/// A view that renders create-account states.
///
/// Implementations only read state; they cannot feed anything back into
/// the fold.
pub trait AccountView: Send + 'static {
    fn apply(&mut self, command: ViewCommand);
}

/// Widget updates for `state`.
pub fn render_commands(state: &AccountState) -> Vec<ViewCommand> {
    match state {
        AccountState::Idle => vec![
            ViewCommand::SetProgressVisible(false),
            ViewCommand::SetInputsEnabled(true),
        ],
        AccountState::InProgress => vec![
            ViewCommand::SetInputsEnabled(false),
            ViewCommand::SetProgressVisible(true),
        ],
        AccountState::Success => vec![ViewCommand::Dismiss],
        AccountState::Error { message } => vec![
            ViewCommand::SetProgressVisible(false),
            ViewCommand::SetInputsEnabled(true),
            ViewCommand::ShowError(message.clone()),
        ],
    }
}

/// Apply `state` to `view`. Returns true if the screen was dismissed.
pub fn render<V: AccountView + ?Sized>(view: &mut V, state: &AccountState) -> bool {
    let mut dismissed = false;
    for command in render_commands(state) {
        dismissed |= command == ViewCommand::Dismiss;
        view.apply(command);
    }
    dismissed
}
