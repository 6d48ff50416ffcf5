use anyhow::Result;
use async_trait::async_trait;

use shared_models::auth::UserProfile;
use shared_models::clinic::{ContactInquiry, InquiryStatus, Provider, Service};

/// Reads and writes against the clinic's document database.
///
/// Handlers only ever see this trait, so tests can swap the REST client for
/// an in-memory store.
#[async_trait]
pub trait ClinicStore: Send + Sync {
    /// `Ok(None)` when no service has this id.
    async fn get_service(&self, service_id: &str) -> Result<Option<Service>>;

    /// Providers whose `serviceIds` contain `service_id`, in storage order.
    async fn get_providers_by_service(&self, service_id: &str) -> Result<Vec<Provider>>;

    async fn get_user_profile(&self, user_id: &str, auth_token: &str) -> Result<Option<UserProfile>>;

    async fn create_contact_inquiry(&self, inquiry: &ContactInquiry) -> Result<ContactInquiry>;

    async fn list_contact_inquiries(
        &self,
        status: Option<InquiryStatus>,
        auth_token: &str,
    ) -> Result<Vec<ContactInquiry>>;
}
