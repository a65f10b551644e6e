//! Reactive state pipeline for the create-account screen.
//!
//! ```text
//!                         ┌─ classify(submit) ─┐              ┌─ SubmitRunner (concurrent) ─┐
//! ViewInput ─→ fan-out ─→ │                    │ ─→ actions ─→│                             │─→ results ─→ fold ─→ states
//!  (events)                └─ classify(check)  ─┘              └─ CheckRunner (debounce +    ─┘
//!                                                                           switch-latest)
//! ```
//!
//! Every stage is a Tokio task. Events and actions travel over channels
//! that wait for room rather than drop, so no accepted input is lost.
//! Results from both runners land in one channel in arrival order, and a
//! single fold task turns them into states. Teardown goes through one [`ShutdownCoordinator`](crate::shutdown::ShutdownCoordinator).

mod classify;
mod debounce;
mod dispatcher;
mod effects;
mod error;
mod source;
mod switch_latest;

pub use debounce::Debouncer;
pub use dispatcher::{Pipeline, PipelineHandle, StateStream};
pub use error::PipelineError;
pub use source::{EventSource, ViewInput};
pub use switch_latest::SwitchSlot;
