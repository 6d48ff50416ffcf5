use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::routes::is_route_allowed;

/// Page-router middleware: paths outside the active allow-list are answered
/// with 404 and never reach a handler. The admin panel's root forwards to
/// its dashboard.
pub async fn route_gate(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let deployment = state.config.deployment;
    let path = request.uri().path();

    if deployment.is_admin() && path == "/" {
        return Ok(Redirect::to(deployment.home_url()).into_response());
    }

    if !is_route_allowed(deployment, path) {
        debug!("Blocked {} in {} deployment", path, deployment);
        return Err(AppError::NotFound(format!(
            "{} is not available in this deployment",
            path
        )));
    }

    Ok(next.run(request).await)
}
