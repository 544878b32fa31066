//! Application state for shared services

use std::sync::Arc;

use crate::domain::generation::TextGenerator;
use crate::infrastructure::services::{RunService, WorkflowService};

/// Shared services handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub workflow_service: Arc<WorkflowService>,
    pub run_service: Arc<RunService>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(
        workflow_service: Arc<WorkflowService>,
        run_service: Arc<RunService>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            workflow_service,
            run_service,
            generator,
        }
    }
}
