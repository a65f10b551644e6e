use rxstate::service::User;
use rxstate::ui::create_account::{AccountReducer, AccountResult, AccountState, Progress};
use rxstate::ui::mvi::Reducer;

fn user() -> User {
    User::new("a@b.com", "xyz")
}

#[test]
fn submit_sequence_success() {
    let states = AccountReducer::scan(
        AccountState::Idle,
        vec![
            AccountResult::Submit(Progress::InProgress),
            AccountResult::Submit(Progress::Success(user())),
        ],
    );
    assert_eq!(states, vec![AccountState::InProgress, AccountState::Success]);
}

#[test]
fn submit_sequence_failure() {
    let states = AccountReducer::scan(
        AccountState::Idle,
        vec![
            AccountResult::Submit(Progress::InProgress),
            AccountResult::Submit(Progress::Error("invalidPassword".to_string())),
        ],
    );
    assert_eq!(
        states,
        vec![
            AccountState::InProgress,
            AccountState::error("invalidPassword"),
        ]
    );
}

#[test]
fn check_success_returns_to_idle_without_closing() {
    let state = AccountReducer::reduce(
        AccountState::InProgress,
        AccountResult::Check(Progress::Success(true)),
    );
    assert_eq!(state, AccountState::Idle);
}

#[test]
fn check_success_on_idle_is_noop() {
    let state = AccountReducer::reduce(AccountState::Idle, AccountResult::Check(Progress::Success(true)));
    assert_eq!(state, AccountState::Idle);
}

#[test]
fn interleaved_kinds_follow_arrival_order() {
    let states = AccountReducer::scan(
        AccountState::Idle,
        vec![
            AccountResult::Check(Progress::InProgress),
            AccountResult::Submit(Progress::InProgress),
            AccountResult::Check(Progress::Success(true)),
            AccountResult::Submit(Progress::Error("invalidPassword".to_string())),
        ],
    );
    assert_eq!(
        states,
        vec![
            AccountState::InProgress,
            AccountState::InProgress,
            AccountState::Idle,
            AccountState::error("invalidPassword"),
        ]
    );
}

#[test]
fn same_sequence_always_gives_same_states() {
    let results = || {
        vec![
            AccountResult::Submit(Progress::InProgress),
            AccountResult::Check(Progress::Error("down".to_string())),
            AccountResult::Submit(Progress::Success(user())),
        ]
    };
    let first = AccountReducer::scan(AccountState::Idle, results());
    let second = AccountReducer::scan(AccountState::Idle, results());
    assert_eq!(first, second);
    assert_eq!(first.last(), Some(&AccountState::Success));
}
