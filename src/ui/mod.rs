pub mod create_account;
pub mod mvi;
pub mod root;
pub mod view;
