use serde::Deserialize;

use shared_models::clinic::InquiryStatus;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct InquiryListQuery {
    pub status: Option<InquiryStatus>,
}
