use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Narrow capability interface over the external text-generation endpoint.
///
/// One invocation is one outbound call; retries are the caller's concern.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Submit a prompt and return the generated text, trimmed.
    ///
    /// An empty response body is an empty string, not an error.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Name of the backing provider, for diagnostics
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted generator for executor tests: a sequence of canned
    /// responses, consumed one per call. The last script entry repeats
    /// once the sequence runs out.
    #[derive(Debug)]
    pub struct MockGenerator {
        script: Mutex<Vec<Result<String, String>>>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        pub fn new() -> Self {
            Self {
                script: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Always respond with the same text
        pub fn with_response(response: impl Into<String>) -> Self {
            Self::new().then_ok(response)
        }

        /// Always fail with the same message
        pub fn with_error(error: impl Into<String>) -> Self {
            Self::new().then_err(error)
        }

        pub fn then_ok(self, response: impl Into<String>) -> Self {
            self.script.lock().unwrap().push(Ok(response.into()));
            self
        }

        pub fn then_err(self, error: impl Into<String>) -> Self {
            self.script.lock().unwrap().push(Err(error.into()));
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Prompts received so far, in call order
        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl Default for MockGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());

            let script = self.script.lock().unwrap();

            let entry = script
                .get(call)
                .or_else(|| script.last())
                .cloned()
                .unwrap_or_else(|| Err("No mock response configured".to_string()));

            entry.map_err(|e| DomainError::provider("mock", e))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
