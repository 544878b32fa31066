//! Run record entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::workflow::{RunResult, StepTrace, WorkflowId};

/// Unique run identifier (UUID v4)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RunId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for RunId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persisted record of one workflow execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    id: RunId,
    workflow_id: WorkflowId,
    input_text: String,
    step_outputs: Vec<StepTrace>,
    final_output: String,
    created_at: DateTime<Utc>,
}

impl Run {
    /// Build a run record from an execution result
    pub fn from_result(workflow_id: WorkflowId, input_text: String, result: RunResult) -> Self {
        Self {
            id: RunId::generate(),
            workflow_id,
            input_text,
            step_outputs: result.step_outputs,
            final_output: result.final_output,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &RunId {
        &self.id
    }

    pub fn workflow_id(&self) -> &WorkflowId {
        &self.workflow_id
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn step_outputs(&self) -> &[StepTrace] {
        &self.step_outputs
    }

    pub fn final_output(&self) -> &str {
        &self.final_output
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl StorageEntity for Run {
    type Key = RunId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
