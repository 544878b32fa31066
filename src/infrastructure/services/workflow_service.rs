//! Workflow service - CRUD operations for workflows

use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::workflow::{Workflow, WorkflowId, WorkflowStep};
use crate::domain::DomainError;

/// Request to create a new workflow
#[derive(Debug, Clone)]
pub struct CreateWorkflowRequest {
    pub id: String,
    pub name: String,
    pub steps: Vec<WorkflowStep>,
}

impl CreateWorkflowRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<WorkflowStep>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }
}

/// Workflow service for CRUD operations
pub struct WorkflowService {
    storage: Arc<dyn Storage<Workflow>>,
}

impl std::fmt::Debug for WorkflowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowService").finish()
    }
}

impl WorkflowService {
    pub fn new(storage: Arc<dyn Storage<Workflow>>) -> Self {
        Self { storage }
    }

    /// Get a workflow by ID
    pub async fn get(&self, id: &str) -> Result<Option<Workflow>, DomainError> {
        let workflow_id = WorkflowId::new(id)?;
        self.storage.get(&workflow_id).await
    }

    /// Get a workflow by ID, failing if absent
    pub async fn get_required(&self, id: &str) -> Result<Workflow, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Workflow '{}' not found", id)))
    }

    /// List all workflows, newest first
    pub async fn list(&self) -> Result<Vec<Workflow>, DomainError> {
        let mut workflows = self.storage.list().await?;
        workflows.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(workflows)
    }

    /// Create a new workflow
    pub async fn create(&self, request: CreateWorkflowRequest) -> Result<Workflow, DomainError> {
        let workflow_id = WorkflowId::new(request.id)?;

        if self.storage.exists(&workflow_id).await? {
            return Err(DomainError::conflict(format!(
                "Workflow '{}' already exists",
                workflow_id
            )));
        }

        let workflow = Workflow::new(workflow_id, request.name, request.steps)?;
        self.storage.create(workflow).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::StepKind;
    use crate::infrastructure::storage::InMemoryStorage;

    fn service() -> WorkflowService {
        WorkflowService::new(Arc::new(InMemoryStorage::new()))
    }

    fn request(id: &str) -> CreateWorkflowRequest {
        CreateWorkflowRequest::new(id, "Test Workflow")
            .with_step(WorkflowStep::new(StepKind::CleanText))
            .with_step(WorkflowStep::new(StepKind::Summarize))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();

        let created = service.create(request("quick-summary")).await.unwrap();
        assert_eq!(created.name(), "Test Workflow");

        let fetched = service.get("quick-summary").await.unwrap();
        assert!(fetched.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let service = service();
        service.create(request("dup")).await.unwrap();

        let result = service.create(request("dup")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_invalid_id_rejected() {
        let result = service().create(request("bad id!")).await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_step_count_validated() {
        let too_few = CreateWorkflowRequest::new("short", "Short")
            .with_step(WorkflowStep::new(StepKind::Summarize));

        let result = service().create(too_few).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_required_missing() {
        let result = service().get_required("missing").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
