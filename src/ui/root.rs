//! Root screen: the entry point that opens create-account.

use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::pipeline::{Pipeline, PipelineHandle};
use crate::service::UserService;

/// Holds what a new create-account screen needs.
pub struct RootScreen {
    service: Arc<dyn UserService>,
    pipeline: PipelineConfig,
}

impl RootScreen {
    pub fn new(service: Arc<dyn UserService>, pipeline: PipelineConfig) -> Self {
        Self { service, pipeline }
    }

    /// Open a fresh create-account screen with its own pipeline.
    pub fn open_create_account(&self) -> PipelineHandle {
        tracing::info!("Opening create-account screen");
        Pipeline::spawn(Arc::clone(&self.service), &self.pipeline)
    }
}
