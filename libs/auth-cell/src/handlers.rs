use axum::{
    extract::{Extension, Query, State},
    http::HeaderMap,
    Json,
};
use tracing::debug;

use shared_config::DeploymentType;
use shared_models::auth::Session;
use shared_models::error::AppError;
use shared_utils::AppState;

use crate::guard::{authorize, AccessDecision};
use crate::models::{DashboardSummary, LoginPage, LoginQuery, SessionQuery, SessionStatus};
use crate::session::resolve_session;

const ADMIN_SECTIONS: &[&str] = &["/appointments", "/patients", "/providers", "/manage-services"];

/// Reports what the admin guard would decide for the caller.
pub async fn get_session_status(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    headers: HeaderMap,
) -> Json<SessionStatus> {
    let requested_path = query.path.unwrap_or_else(|| "/dashboard".to_string());
    let session = resolve_session(&state, &headers).await;
    let decision = authorize(&session, &requested_path);

    debug!("Session check for {}: {:?}", requested_path, decision);

    let redirect_to = match decision {
        AccessDecision::Allow => None,
        AccessDecision::DenyRedirect(target) => Some(target),
    };

    Json(SessionStatus {
        authenticated: session.user.is_some(),
        user_id: session.user.as_ref().map(|u| u.id.clone()),
        role: session.profile_role().map(str::to_string),
        allowed: redirect_to.is_none(),
        redirect_to,
        requested_path,
    })
}

/// Only same-site absolute paths are honoured as post-login targets.
pub fn sanitize_redirect(redirect: Option<&str>, deployment: DeploymentType) -> String {
    match redirect {
        Some(target) if target.starts_with('/') && !target.starts_with("//") => target.to_string(),
        _ => deployment.login_redirect_url().to_string(),
    }
}

pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Json<LoginPage> {
    let deployment = state.config.deployment;

    Json(LoginPage {
        deployment,
        redirect: sanitize_redirect(query.redirect.as_deref(), deployment),
    })
}

pub async fn dashboard(Extension(session): Extension<Session>) -> Result<Json<DashboardSummary>, AppError> {
    let user = session
        .user
        .as_ref()
        .ok_or_else(|| AppError::Auth("No authenticated user".to_string()))?;

    Ok(Json(DashboardSummary {
        user_id: user.id.clone(),
        email: user.email.clone(),
        display_name: session.profile.as_ref().and_then(|p| p.display_name.clone()),
        sections: ADMIN_SECTIONS.to_vec(),
    }))
}
