use std::env;

use axum::{extract::State, Json};
use tracing::warn;

use shared_utils::AppState;

use crate::models::{DebugEnvReport, DeploymentSettings};

pub async fn get_deployment_settings(State(state): State<AppState>) -> Json<DeploymentSettings> {
    Json(DeploymentSettings::from(state.config.deployment))
}

pub async fn debug_env(State(state): State<AppState>) -> Json<DebugEnvReport> {
    warn!("Serving environment diagnostics");
    Json(DebugEnvReport::from_vars(env::vars(), state.config.deployment))
}
