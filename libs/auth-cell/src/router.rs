use axum::{middleware, routing::get, Router};

use shared_utils::AppState;

use crate::guard::admin_guard;
use crate::handlers;

/// Sign-in page, available in both deployments.
pub fn auth_page_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", get(handlers::login_page))
        .with_state(state)
}

/// Admin panel pages owned by this cell, behind the admin guard.
pub fn admin_page_routes(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .layer(middleware::from_fn_with_state(state.clone(), admin_guard))
        .with_state(state)
}

pub fn auth_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/session", get(handlers::get_session_status))
        .with_state(state)
}
