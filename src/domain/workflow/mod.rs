//! Workflow domain - step kinds, entities, prompts, and execution traits

mod entity;
mod executor;
mod normalize;
mod prompt;
mod step_kind;

pub use entity::{
    validate_workflow_id, Workflow, WorkflowId, WorkflowStep, MAX_ID_LENGTH, MAX_STEPS, MIN_STEPS,
};
pub use executor::{RunResult, StepTrace, WorkflowExecutor};
pub use normalize::normalize_text;
pub use prompt::build_prompt;
pub use step_kind::StepKind;
