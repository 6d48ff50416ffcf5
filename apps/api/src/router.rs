use axum::{
    extract::State,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use auth_cell::router::{admin_page_routes, auth_api_routes, auth_page_routes};
use contact_cell::router::{contact_admin_routes, contact_page_routes};
use deployment_cell::gate::route_gate;
use deployment_cell::router::deployment_routes;
use provider_cell::router::provider_page_routes;
use shared_models::error::AppError;
use shared_utils::AppState;

async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Dental clinic is running",
        "deployment": state.config.deployment,
        "homeUrl": state.config.deployment.home_url(),
    }))
}

async fn page_not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

pub fn create_router(state: AppState) -> Router {
    // Every page goes through the deployment gate, including the fallback.
    let pages = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .merge(auth_page_routes(state.clone()))
        .merge(admin_page_routes(state.clone()))
        .merge(provider_page_routes(state.clone()))
        .merge(contact_page_routes(state.clone()))
        .merge(contact_admin_routes(state.clone()))
        .fallback(page_not_found)
        .layer(middleware::from_fn_with_state(state.clone(), route_gate));

    let api = Router::new()
        .merge(deployment_routes(state.clone()))
        .nest("/auth", auth_api_routes(state));

    Router::new().nest("/api", api).merge(pages)
}
