//! Textflow
//!
//! An HTTP service for running named text-processing pipelines. A
//! workflow is an ordered list of steps; each step either normalizes
//! text locally or transforms it through an LLM chat completions
//! backend. Every execution is recorded as a run with per-step traces.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use domain::generation::TextGenerator;
use domain::run::Run;
use domain::storage::Storage;
use domain::workflow::{StepKind, Workflow, WorkflowExecutor, WorkflowStep};
use infrastructure::generation::{HttpClient, OpenAiGenerator};
use infrastructure::services::{CreateWorkflowRequest, RunService, WorkflowService};
use infrastructure::storage::{InMemoryStorage, PostgresConfig, PostgresStorage};
use infrastructure::workflow::PipelineExecutor;

/// Build the application state: one shared generator, the configured
/// storage backend, and the services wired on top
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let generator = build_generator(config);

    let (workflow_storage, run_storage) = build_storage(config).await?;

    let executor: Arc<dyn WorkflowExecutor> =
        Arc::new(PipelineExecutor::new(generator.clone()));

    let workflow_service = Arc::new(WorkflowService::new(workflow_storage));
    let run_service = Arc::new(RunService::new(
        workflow_service.clone(),
        run_storage,
        executor,
    ));

    seed_workflows(&workflow_service).await?;

    Ok(AppState::new(workflow_service, run_service, generator))
}

/// The generation client is constructed once and shared across requests
fn build_generator(config: &AppConfig) -> Arc<dyn TextGenerator> {
    let generation = &config.generation;

    Arc::new(
        OpenAiGenerator::new(HttpClient::new(), generation.api_key.clone())
            .with_base_url(generation.base_url.clone())
            .with_model(generation.model.clone())
            .with_temperature(generation.temperature)
            .with_max_tokens(generation.max_tokens)
            .with_timeout(Duration::from_secs(generation.timeout_secs)),
    )
}

async fn build_storage(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn Storage<Workflow>>, Arc<dyn Storage<Run>>)> {
    match config.storage.backend.as_str() {
        "postgres" => {
            let url = config.storage.database_url.clone().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url is required for the postgres backend")
            })?;

            info!("Using PostgreSQL storage");
            let pg_config = PostgresConfig::new(url);

            let workflows =
                PostgresStorage::<Workflow>::connect(&pg_config, "workflows").await?;
            workflows.ensure_table().await?;

            let runs = PostgresStorage::<Run>::connect(&pg_config, "runs").await?;
            runs.ensure_table().await?;

            Ok((Arc::new(workflows), Arc::new(runs)))
        }
        "memory" => {
            info!("Using in-memory storage");
            Ok((
                Arc::new(InMemoryStorage::new()),
                Arc::new(InMemoryStorage::new()),
            ))
        }
        other => Err(anyhow::anyhow!("Unknown storage backend '{}'", other)),
    }
}

/// Insert the default workflows when the store is empty
async fn seed_workflows(service: &WorkflowService) -> anyhow::Result<()> {
    if !service.list().await?.is_empty() {
        return Ok(());
    }

    for request in default_workflows() {
        info!("Seeding workflow '{}'", request.id);
        service.create(request).await?;
    }

    Ok(())
}

fn default_workflows() -> Vec<CreateWorkflowRequest> {
    let definitions: [(&str, &str, &[StepKind]); 3] = [
        (
            "quick-summary",
            "Quick Summary",
            &[StepKind::CleanText, StepKind::Summarize],
        ),
        (
            "key-points",
            "Key Points",
            &[StepKind::CleanText, StepKind::ExtractKeyPoints],
        ),
        (
            "category-tagger",
            "Category Tagger",
            &[StepKind::CleanText, StepKind::TagCategory],
        ),
    ];

    definitions
        .into_iter()
        .map(|(id, name, kinds)| {
            CreateWorkflowRequest::new(id, name)
                .with_steps(kinds.iter().copied().map(WorkflowStep::new).collect())
        })
        .collect()
}
