use axum::{middleware, routing::{get, post}, Router};

use auth_cell::admin_guard;
use shared_utils::AppState;

use crate::handlers;

pub fn contact_page_routes(state: AppState) -> Router {
    Router::new()
        .route("/contact", post(handlers::submit_inquiry))
        .with_state(state)
}

pub fn contact_admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/dashboard/inquiries", get(handlers::list_inquiries))
        .layer(middleware::from_fn_with_state(state.clone(), admin_guard))
        .with_state(state)
}
