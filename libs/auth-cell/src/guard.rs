use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, info};

use shared_models::auth::{Session, ADMIN_ROLE};
use shared_utils::AppState;

use crate::session::resolve_session;

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    DenyRedirect(String),
}

/// Login URL that brings the caller back to `requested_path` afterwards.
pub fn login_redirect_target(requested_path: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(requested_path))
}

/// Admin pages need a signed-in user whose profile role is exactly `admin`.
pub fn authorize(session: &Session, requested_path: &str) -> AccessDecision {
    match (&session.user, session.profile_role()) {
        (None, _) => AccessDecision::DenyRedirect(login_redirect_target(requested_path)),
        (Some(_), Some(ADMIN_ROLE)) => AccessDecision::Allow,
        (Some(_), _) => AccessDecision::DenyRedirect("/".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthorized { redirect_to: String },
    Authorized,
}

/// One guard per mounted admin page. Starts in `Loading` until the session
/// check completes and never goes back to it; later session changes
/// re-evaluate between the two terminal states.
#[derive(Debug)]
pub struct AdminGuard {
    requested_path: String,
    state: GuardState,
}

impl AdminGuard {
    pub fn new(requested_path: impl Into<String>) -> Self {
        Self {
            requested_path: requested_path.into(),
            state: GuardState::Loading,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn is_resolved(&self) -> bool {
        self.state != GuardState::Loading
    }

    pub fn resolve(&mut self, session: &Session) -> AccessDecision {
        let decision = authorize(session, &self.requested_path);

        self.state = match &decision {
            AccessDecision::Allow => GuardState::Authorized,
            AccessDecision::DenyRedirect(target) => GuardState::Unauthorized {
                redirect_to: target.clone(),
            },
        };

        decision
    }
}

pub async fn admin_guard(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let mut guard = AdminGuard::new(request.uri().path());
    let session = resolve_session(&state, request.headers()).await;

    match guard.resolve(&session) {
        AccessDecision::Allow => {
            debug!("Admin access granted for {}", request.uri().path());
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        AccessDecision::DenyRedirect(target) => {
            info!("Redirecting {} to {}", request.uri().path(), target);
            Redirect::to(&target).into_response()
        }
    }
}
