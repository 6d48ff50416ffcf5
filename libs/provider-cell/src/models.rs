use serde::{Deserialize, Serialize};

use shared_models::clinic::{Provider, Service};

/// Filter value that keeps every provider.
pub const ALL_SPECIALTIES: &str = "all";

pub const BOOKING_START: &str = "/booking";
pub const DATETIME_STEP: &str = "/booking/datetime";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Rating,
    Experience,
    Name,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBrowserQuery {
    pub service_id: Option<String>,
    pub specialty: Option<String>,
    pub sort: Option<SortBy>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProviderQuery {
    pub service_id: String,
    pub provider_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything the provider selection step renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBrowserView {
    pub service: Option<Service>,
    /// `"all"` first, then each distinct specialty.
    pub specialties: Vec<String>,
    pub specialty: String,
    pub sort: SortBy,
    pub providers: Vec<Provider>,
    pub notification: Option<Notification>,
    pub redirect_to: Option<String>,
}

impl ProviderBrowserView {
    pub fn empty(specialty: String, sort: SortBy) -> Self {
        Self {
            service: None,
            specialties: vec![ALL_SPECIALTIES.to_string()],
            specialty,
            sort,
            providers: Vec::new(),
            notification: None,
            redirect_to: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextStep {
    pub service_id: String,
    pub provider_id: String,
    pub next: String,
}
