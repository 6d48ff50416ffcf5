use axum::http::HeaderMap;
use tracing::warn;

use shared_models::auth::Session;
use shared_utils::extractor::authenticated_user;
use shared_utils::AppState;

/// Builds the caller's session. A missing or invalid token gives an anonymous
/// session; a failed profile lookup keeps the user but without a role.
pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Session {
    let Some((user, token)) = authenticated_user(headers, &state.config.supabase_jwt_secret) else {
        return Session::anonymous();
    };

    let profile = match state.store.get_user_profile(&user.id, &token).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Profile lookup failed for {}: {}", user.id, e);
            None
        }
    };

    Session {
        user: Some(user),
        profile,
        access_token: Some(token),
    }
}
