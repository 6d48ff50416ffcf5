use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

/// Mode-independent API routes, mounted outside the page gate.
pub fn deployment_routes(state: AppState) -> Router {
    let mut router = Router::new().route("/deployment", get(handlers::get_deployment_settings));

    if state.config.debug_endpoints {
        router = router.route("/debug-env", get(handlers::debug_env));
    }

    router.with_state(state)
}
