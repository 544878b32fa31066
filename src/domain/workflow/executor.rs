//! Workflow execution trait and trace types

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::entity::WorkflowStep;
use super::StepKind;

/// Record of a single executed step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTrace {
    /// Which transformation ran
    pub step_kind: StepKind,

    /// The step's output text. For a failed step this is the last good
    /// text that was fed into it.
    pub output: String,

    /// Failure message, present only when the step failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Wall-clock duration of the step, including retries
    pub duration_ms: u64,

    /// Attempts made (1 for local steps and first-try successes)
    pub attempts: u32,
}

impl StepTrace {
    pub fn success(step_kind: StepKind, output: String, duration_ms: u64, attempts: u32) -> Self {
        Self {
            step_kind,
            output,
            error: None,
            duration_ms,
            attempts,
        }
    }

    pub fn failure(
        step_kind: StepKind,
        last_good_text: String,
        error: String,
        duration_ms: u64,
        attempts: u32,
    ) -> Self {
        Self {
            step_kind,
            output: last_good_text,
            error: Some(error),
            duration_ms,
            attempts,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of running a pipeline: one trace per executed step plus the
/// final text. On short-circuit the final text is the last successful
/// step's output (or the original input if the first step failed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub step_outputs: Vec<StepTrace>,
    pub final_output: String,
}

impl RunResult {
    /// Whether every executed step succeeded
    pub fn is_complete(&self) -> bool {
        self.step_outputs.iter().all(|t| !t.is_failure())
    }
}

/// Executes an ordered list of steps against an input text.
///
/// Step failures are recoverable by design: they surface in the trace,
/// never as an `Err`.
#[async_trait]
pub trait WorkflowExecutor: Send + Sync + Debug {
    async fn run(&self, steps: &[WorkflowStep], input_text: &str) -> RunResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_trace_serializes_error() {
        let trace = StepTrace::failure(
            StepKind::Summarize,
            "input".to_string(),
            "request timed out".to_string(),
            1500,
            3,
        );

        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["step_kind"], "summarize");
        assert_eq!(json["error"], "request timed out");
        assert_eq!(json["attempts"], 3);
    }

    #[test]
    fn test_success_trace_omits_error_field() {
        let trace = StepTrace::success(StepKind::CleanText, "clean".to_string(), 0, 1);

        let json = serde_json::to_value(&trace).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_run_result_completeness() {
        let ok = RunResult {
            step_outputs: vec![StepTrace::success(StepKind::CleanText, "a".into(), 0, 1)],
            final_output: "a".to_string(),
        };
        assert!(ok.is_complete());

        let failed = RunResult {
            step_outputs: vec![StepTrace::failure(
                StepKind::Summarize,
                "a".into(),
                "boom".into(),
                10,
                3,
            )],
            final_output: "a".to_string(),
        };
        assert!(!failed.is_complete());
    }
}
