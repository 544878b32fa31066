//! Run service - executes workflows and records run history

use std::sync::Arc;

use tracing::info;

use crate::domain::run::Run;
use crate::domain::storage::Storage;
use crate::domain::workflow::{Workflow, WorkflowExecutor};
use crate::domain::DomainError;

use super::workflow_service::WorkflowService;

/// Number of runs returned by the recent-history query
pub const RECENT_RUN_LIMIT: usize = 5;

/// A run joined with its workflow's display name
#[derive(Debug, Clone)]
pub struct RunWithWorkflow {
    pub run: Run,
    pub workflow_name: String,
}

/// Run service: executes a workflow against input text and persists the
/// resulting run record
pub struct RunService {
    workflows: Arc<WorkflowService>,
    runs: Arc<dyn Storage<Run>>,
    executor: Arc<dyn WorkflowExecutor>,
}

impl std::fmt::Debug for RunService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunService").finish()
    }
}

impl RunService {
    pub fn new(
        workflows: Arc<WorkflowService>,
        runs: Arc<dyn Storage<Run>>,
        executor: Arc<dyn WorkflowExecutor>,
    ) -> Self {
        Self {
            workflows,
            runs,
            executor,
        }
    }

    /// Execute a workflow against the given input and persist the run.
    ///
    /// Step failures do not surface here; they are recorded in the run's
    /// step traces. Errors mean the request itself was invalid or
    /// persistence failed.
    pub async fn execute(&self, workflow_id: &str, input_text: &str) -> Result<Run, DomainError> {
        if input_text.trim().is_empty() {
            return Err(DomainError::validation("Input text is required"));
        }

        let workflow = self.workflows.get_required(workflow_id).await?;

        info!(
            "Running workflow '{}' ({} steps)",
            workflow.id(),
            workflow.steps().len()
        );

        let result = self.executor.run(workflow.steps(), input_text).await;
        let run = Run::from_result(workflow.id().clone(), input_text.to_string(), result);

        self.runs.create(run).await
    }

    /// The most recent runs, newest first, joined with workflow names
    pub async fn recent(&self) -> Result<Vec<RunWithWorkflow>, DomainError> {
        let mut runs = self.runs.list().await?;
        runs.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        runs.truncate(RECENT_RUN_LIMIT);

        let workflows = self.workflows.list().await?;

        Ok(runs
            .into_iter()
            .map(|run| {
                let workflow_name = workflows
                    .iter()
                    .find(|w| w.id() == run.workflow_id())
                    .map(Workflow::name)
                    .unwrap_or("Unknown")
                    .to_string();
                RunWithWorkflow { run, workflow_name }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::mock::MockGenerator;
    use crate::domain::generation::TextGenerator;
    use crate::domain::retry::RetryPolicy;
    use crate::domain::workflow::{StepKind, WorkflowStep};
    use crate::infrastructure::services::workflow_service::CreateWorkflowRequest;
    use crate::infrastructure::storage::InMemoryStorage;
    use crate::infrastructure::workflow::PipelineExecutor;

    async fn service_with(generator: MockGenerator) -> RunService {
        let workflows = Arc::new(WorkflowService::new(Arc::new(InMemoryStorage::new())));

        workflows
            .create(
                CreateWorkflowRequest::new("quick-summary", "Quick Summary")
                    .with_step(WorkflowStep::new(StepKind::CleanText))
                    .with_step(WorkflowStep::new(StepKind::Summarize)),
            )
            .await
            .unwrap();

        let executor = PipelineExecutor::new(Arc::new(generator) as Arc<dyn TextGenerator>)
            .with_retry_policy(RetryPolicy::default().with_initial_delay(1).with_max_delay(2));

        RunService::new(workflows, Arc::new(InMemoryStorage::new()), Arc::new(executor))
    }

    #[tokio::test]
    async fn test_execute_persists_run() {
        let service = service_with(MockGenerator::with_response("a summary")).await;

        let run = service.execute("quick-summary", "  raw   text  ").await.unwrap();

        assert_eq!(run.final_output(), "a summary");
        assert_eq!(run.step_outputs().len(), 2);
        assert_eq!(run.input_text(), "  raw   text  ");

        let recent = service.recent().await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].workflow_name, "Quick Summary");
    }

    #[tokio::test]
    async fn test_blank_input_rejected() {
        let service = service_with(MockGenerator::with_response("x")).await;

        let result = service.execute("quick-summary", "   ").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_unknown_workflow_rejected() {
        let service = service_with(MockGenerator::with_response("x")).await;

        let result = service.execute("missing", "some input").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_failed_step_still_persists() {
        let service = service_with(MockGenerator::with_error("upstream down")).await;

        let run = service.execute("quick-summary", "some raw input").await.unwrap();

        assert_eq!(run.final_output(), "some raw input");
        let failed = run.step_outputs().last().unwrap();
        assert_eq!(failed.error.as_deref(), Some("upstream down"));
        assert_eq!(failed.attempts, 3);
    }

    #[tokio::test]
    async fn test_recent_caps_at_limit() {
        let service = service_with(MockGenerator::with_response("out")).await;

        for _ in 0..7 {
            service.execute("quick-summary", "input").await.unwrap();
        }

        let recent = service.recent().await.unwrap();
        assert_eq!(recent.len(), RECENT_RUN_LIMIT);
    }
}
