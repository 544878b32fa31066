//! Run endpoints - execute workflows and browse history

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::run::Run;
use crate::domain::workflow::StepTrace;
use crate::infrastructure::services::RunWithWorkflow;

/// Request body for executing a workflow
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteRunBody {
    pub workflow_id: String,
    pub input_text: String,
}

/// A run record as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    pub id: String,
    pub workflow_id: String,
    pub input_text: String,
    pub step_outputs: Vec<StepTrace>,
    pub final_output: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
}

impl From<&Run> for RunResponse {
    fn from(run: &Run) -> Self {
        Self {
            id: run.id().to_string(),
            workflow_id: run.workflow_id().to_string(),
            input_text: run.input_text().to_string(),
            step_outputs: run.step_outputs().to_vec(),
            final_output: run.final_output().to_string(),
            created_at: run.created_at(),
            workflow_name: None,
        }
    }
}

impl From<&RunWithWorkflow> for RunResponse {
    fn from(entry: &RunWithWorkflow) -> Self {
        let mut response = Self::from(&entry.run);
        response.workflow_name = Some(entry.workflow_name.clone());
        response
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunListResponse {
    pub runs: Vec<RunResponse>,
}

/// POST /v1/runs
pub async fn execute_run(
    State(state): State<AppState>,
    Json(body): Json<ExecuteRunBody>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Executing workflow '{}'", body.workflow_id);

    let run = state
        .run_service
        .execute(&body.workflow_id, &body.input_text)
        .await?;

    Ok((StatusCode::CREATED, Json(RunResponse::from(&run))))
}

/// GET /v1/runs/recent
pub async fn recent_runs(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let runs = state.run_service.recent().await?;

    Ok(Json(RunListResponse {
        runs: runs.iter().map(RunResponse::from).collect(),
    }))
}
