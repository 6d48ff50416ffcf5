use http::HeaderMap;
use tracing::debug;

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::jwt::validate_token;

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    auth_value
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))
}

/// Caller identity when a valid token is present. Absent or invalid tokens
/// both mean an anonymous caller.
pub fn authenticated_user(headers: &HeaderMap, jwt_secret: &str) -> Option<(User, String)> {
    let token = extract_bearer_token(headers).ok()?;

    match validate_token(&token, jwt_secret) {
        Ok(user) => Some((user, token)),
        Err(e) => {
            debug!("Treating caller as anonymous: {}", e);
            None
        }
    }
}
