use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{debug, error};
use uuid::Uuid;

use shared_models::auth::Session;
use shared_models::clinic::{ContactInquiry, InquiryStatus};
use shared_models::error::AppError;
use shared_utils::AppState;

use crate::models::{CreateInquiryRequest, InquiryListQuery};
use crate::validation::validate_inquiry;

pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(request): Json<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<ContactInquiry>), AppError> {
    validate_inquiry(&request)?;

    let now = Utc::now();
    let inquiry = ContactInquiry {
        id: Uuid::new_v4().to_string(),
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.filter(|p| !p.trim().is_empty()),
        subject: request.subject.trim().to_string(),
        message: request.message,
        status: InquiryStatus::New,
        created_at: Some(now),
        updated_at: Some(now),
    };

    let created = state.store.create_contact_inquiry(&inquiry).await.map_err(|e| {
        error!("Failed to store contact inquiry: {}", e);
        AppError::Database("Failed to submit inquiry".to_string())
    })?;

    debug!("Contact inquiry {} submitted", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_inquiries(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<InquiryListQuery>,
) -> Result<Json<Vec<ContactInquiry>>, AppError> {
    let token = session
        .access_token
        .as_deref()
        .ok_or_else(|| AppError::Auth("Missing access token".to_string()))?;

    let inquiries = state
        .store
        .list_contact_inquiries(query.status, token)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(inquiries))
}
