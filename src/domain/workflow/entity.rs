//! Workflow domain entity

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

use super::StepKind;

/// Maximum length for workflow IDs
pub const MAX_ID_LENGTH: usize = 50;

/// Minimum number of steps in a workflow
pub const MIN_STEPS: usize = 2;

/// Maximum number of steps in a workflow
pub const MAX_STEPS: usize = 6;

/// Regex pattern for valid workflow IDs: alphanumeric and hyphens
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]$|^[a-zA-Z0-9]$").unwrap());

/// Validated workflow identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkflowId(String);

impl WorkflowId {
    /// Create a new validated workflow ID
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        validate_workflow_id(&id)?;
        Ok(Self(id))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WorkflowId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkflowId> for String {
    fn from(id: WorkflowId) -> Self {
        id.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WorkflowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StorageKey for WorkflowId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate a workflow ID string
pub fn validate_workflow_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::invalid_id("Workflow ID cannot be empty"));
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(DomainError::invalid_id(format!(
            "Workflow ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }

    if !ID_PATTERN.is_match(id) {
        return Err(DomainError::invalid_id(format!(
            "Invalid workflow ID '{}': must be alphanumeric with hyphens, start and end with alphanumeric",
            id
        )));
    }

    Ok(())
}

/// A single step within a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// The transformation this step applies
    pub kind: StepKind,
}

impl WorkflowStep {
    pub fn new(kind: StepKind) -> Self {
        Self { kind }
    }
}

impl From<StepKind> for WorkflowStep {
    fn from(kind: StepKind) -> Self {
        Self::new(kind)
    }
}

/// A named, ordered pipeline of text-processing steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    id: WorkflowId,
    name: String,
    steps: Vec<WorkflowStep>,
    created_at: DateTime<Utc>,
}

impl Workflow {
    /// Create a new workflow, validating the name and step count
    pub fn new(
        id: WorkflowId,
        name: impl Into<String>,
        steps: Vec<WorkflowStep>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        validate_steps(&steps)?;

        Ok(Self {
            id,
            name,
            steps,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &WorkflowId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl StorageEntity for Workflow {
    type Key = WorkflowId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Workflow name cannot be empty"));
    }

    Ok(())
}

fn validate_steps(steps: &[WorkflowStep]) -> Result<(), DomainError> {
    if steps.len() < MIN_STEPS || steps.len() > MAX_STEPS {
        return Err(DomainError::validation(format!(
            "Workflow must have between {} and {} steps, got {}",
            MIN_STEPS,
            MAX_STEPS,
            steps.len()
        )));
    }

    Ok(())
}
