//! Application services

pub mod run_service;
pub mod workflow_service;

pub use run_service::{RunService, RunWithWorkflow, RECENT_RUN_LIMIT};
pub use workflow_service::{CreateWorkflowRequest, WorkflowService};
