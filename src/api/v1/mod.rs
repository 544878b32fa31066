//! v1 API endpoints

pub mod runs;
pub mod workflows;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/workflows",
            get(workflows::list_workflows).post(workflows::create_workflow),
        )
        .route("/runs", post(runs::execute_run))
        .route("/runs/recent", get(runs::recent_runs))
}
