use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn provider_page_routes(state: AppState) -> Router {
    Router::new()
        .route("/booking/provider", get(handlers::browse_providers))
        .route("/booking/provider/select", get(handlers::select_provider))
        .with_state(state)
}
