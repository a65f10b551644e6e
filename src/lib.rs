//! Deterministic UI state through a unidirectional reactive pipeline.
//!
//! View input becomes events, events become actions, actions run effects
//! that report results, and a single fold turns results into the state the
//! view renders.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod service;
pub mod shutdown;
pub mod ui;
