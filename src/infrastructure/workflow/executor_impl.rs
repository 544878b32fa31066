//! Sequential pipeline executor

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::generation::TextGenerator;
use crate::domain::retry::{retry, RetryPolicy};
use crate::domain::workflow::{
    build_prompt, normalize_text, RunResult, StepKind, StepTrace, WorkflowExecutor, WorkflowStep,
};

/// Runs steps in order, threading each step's output into the next.
///
/// Generative steps go through the shared generator under the retry
/// policy; `clean_text` runs locally. The first step that exhausts its
/// retries short-circuits the pipeline, leaving the last good text as
/// the final output.
#[derive(Debug)]
pub struct PipelineExecutor {
    generator: Arc<dyn TextGenerator>,
    retry_policy: RetryPolicy,
}

impl PipelineExecutor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }
}

#[async_trait]
impl WorkflowExecutor for PipelineExecutor {
    async fn run(&self, steps: &[WorkflowStep], input_text: &str) -> RunResult {
        let mut current_text = input_text.to_string();
        let mut step_outputs = Vec::with_capacity(steps.len());

        for (index, step) in steps.iter().enumerate() {
            let start = Instant::now();
            debug!("Executing step '{}' (index {})", step.kind, index);

            if step.kind == StepKind::CleanText {
                let output = normalize_text(&current_text);
                let duration_ms = start.elapsed().as_millis() as u64;
                step_outputs.push(StepTrace::success(step.kind, output.clone(), duration_ms, 1));
                current_text = output;
                continue;
            }

            let prompt = build_prompt(step.kind, &current_text);
            let outcome = retry(&self.retry_policy, || self.generator.generate(&prompt)).await;
            let duration_ms = start.elapsed().as_millis() as u64;

            match outcome.result {
                Ok(output) => {
                    step_outputs.push(StepTrace::success(
                        step.kind,
                        output.clone(),
                        duration_ms,
                        outcome.attempts,
                    ));
                    current_text = output;
                }
                Err(e) => {
                    warn!(
                        "Step '{}' failed after {} attempts: {}",
                        step.kind, outcome.attempts, e
                    );
                    step_outputs.push(StepTrace::failure(
                        step.kind,
                        current_text.clone(),
                        e.message().to_string(),
                        duration_ms,
                        outcome.attempts,
                    ));
                    break;
                }
            }
        }

        RunResult {
            step_outputs,
            final_output: current_text,
        }
    }
}
