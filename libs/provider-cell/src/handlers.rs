use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tracing::{debug, error, info};

use auth_cell::guard::login_redirect_target;
use shared_models::error::AppError;
use shared_utils::extractor::authenticated_user;
use shared_utils::AppState;

use crate::models::{
    NextStep, Notification, ProviderBrowserQuery, ProviderBrowserView, SelectProviderQuery,
    ALL_SPECIALTIES, BOOKING_START, DATETIME_STEP,
};
use crate::services::{
    filter_by_specialty, sort_providers, specialty_options, CatalogLoad, ProviderCatalog,
};

/// Step 2 of booking: providers eligible for the chosen service.
///
/// Load failures never error the page. A missing service yields a
/// notification plus a redirect back to the booking start; any other failure
/// yields a notification and an empty list.
pub async fn browse_providers(
    State(state): State<AppState>,
    Query(query): Query<ProviderBrowserQuery>,
    headers: HeaderMap,
) -> Response {
    if authenticated_user(&headers, &state.config.supabase_jwt_secret).is_none() {
        return Redirect::to(&login_redirect_target(BOOKING_START)).into_response();
    }

    let Some(service_id) = query.service_id.filter(|id| !id.is_empty()) else {
        debug!("No serviceId given, back to booking start");
        return Redirect::to(BOOKING_START).into_response();
    };

    let specialty = query.specialty.unwrap_or_else(|| ALL_SPECIALTIES.to_string());
    let sort = query.sort.unwrap_or_default();
    let mut view = ProviderBrowserView::empty(specialty.clone(), sort);

    let catalog = ProviderCatalog::new(state.store.clone());
    match catalog.load(&service_id).await {
        Ok(CatalogLoad::Found { service, providers }) => {
            view.specialties = specialty_options(&providers);

            let mut shown = filter_by_specialty(providers, &specialty);
            sort_providers(&mut shown, sort);

            view.service = Some(service);
            view.providers = shown;
        }
        Ok(CatalogLoad::ServiceNotFound) => {
            info!("Service {} not found", service_id);
            view.notification = Some(Notification::error("Service not found"));
            view.redirect_to = Some(BOOKING_START.to_string());
        }
        Err(e) => {
            error!("Error loading providers for service {}: {}", service_id, e);
            view.notification = Some(Notification::error("Failed to load providers"));
        }
    }

    Json(view).into_response()
}

pub async fn select_provider(
    Query(query): Query<SelectProviderQuery>,
) -> Result<Json<NextStep>, AppError> {
    if query.service_id.is_empty() || query.provider_id.is_empty() {
        return Err(AppError::BadRequest(
            "serviceId and providerId are required".to_string(),
        ));
    }

    let next = format!(
        "{}?serviceId={}&providerId={}",
        DATETIME_STEP,
        urlencoding::encode(&query.service_id),
        urlencoding::encode(&query.provider_id)
    );

    Ok(Json(NextStep {
        service_id: query.service_id,
        provider_id: query.provider_id,
        next,
    }))
}
