//! Workflow endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::workflow::{StepKind, Workflow, WorkflowStep};
use crate::infrastructure::services::CreateWorkflowRequest;

/// Request body for creating a workflow
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkflowBody {
    pub id: String,
    pub name: String,
    pub steps: Vec<StepKind>,
}

/// A workflow as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResponse {
    pub id: String,
    pub name: String,
    pub steps: Vec<StepKind>,
    pub created_at: DateTime<Utc>,
}

impl From<&Workflow> for WorkflowResponse {
    fn from(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id().to_string(),
            name: workflow.name().to_string(),
            steps: workflow.steps().iter().map(|s| s.kind).collect(),
            created_at: workflow.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowListResponse {
    pub workflows: Vec<WorkflowResponse>,
}

/// GET /v1/workflows
pub async fn list_workflows(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let workflows = state.workflow_service.list().await?;

    Ok(Json(WorkflowListResponse {
        workflows: workflows.iter().map(WorkflowResponse::from).collect(),
    }))
}

/// POST /v1/workflows
pub async fn create_workflow(
    State(state): State<AppState>,
    Json(body): Json<CreateWorkflowBody>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating workflow '{}'", body.id);

    let request = CreateWorkflowRequest::new(body.id, body.name)
        .with_steps(body.steps.into_iter().map(WorkflowStep::new).collect());

    let workflow = state.workflow_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(WorkflowResponse::from(&workflow))))
}
