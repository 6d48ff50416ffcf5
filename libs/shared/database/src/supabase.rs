use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::auth::UserProfile;
use shared_models::clinic::{ContactInquiry, InquiryStatus, Provider, Service};

use crate::store::ClinicStore;

/// PostgREST-style client for the clinic collections.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.anon_key).context("Invalid anon key header value")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = auth_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .context("Invalid bearer token header value")?,
            );
        }

        Ok(headers)
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request_with_headers(method, path, auth_token, body, None).await
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers(auth_token)?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

#[async_trait]
impl ClinicStore for SupabaseClient {
    async fn get_service(&self, service_id: &str) -> Result<Option<Service>> {
        let path = format!("/rest/v1/services?id=eq.{}", urlencoding::encode(service_id));
        let mut rows: Vec<Service> = self.request(Method::GET, &path, None, None).await?;

        if rows.is_empty() {
            debug!("Service {} not found", service_id);
            return Ok(None);
        }

        Ok(Some(rows.swap_remove(0)))
    }

    async fn get_providers_by_service(&self, service_id: &str) -> Result<Vec<Provider>> {
        // Array containment: serviceIds @> {service_id}
        let filter = format!("{{\"{}\"}}", service_id.replace('"', "\\\""));
        let path = format!("/rest/v1/providers?serviceIds=cs.{}", urlencoding::encode(&filter));

        let providers: Vec<Provider> = self.request(Method::GET, &path, None, None).await?;
        debug!("Found {} providers for service {}", providers.len(), service_id);

        Ok(providers)
    }

    async fn get_user_profile(&self, user_id: &str, auth_token: &str) -> Result<Option<UserProfile>> {
        let path = format!("/rest/v1/user_profiles?id=eq.{}", urlencoding::encode(user_id));
        let mut rows: Vec<UserProfile> =
            self.request(Method::GET, &path, Some(auth_token), None).await?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(rows.swap_remove(0)))
    }

    async fn create_contact_inquiry(&self, inquiry: &ContactInquiry) -> Result<ContactInquiry> {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let mut created: Vec<ContactInquiry> = self
            .request_with_headers(
                Method::POST,
                "/rest/v1/contact_inquiries",
                None,
                Some(serde_json::to_value(inquiry)?),
                Some(headers),
            )
            .await?;

        if created.is_empty() {
            return Err(anyhow!("Failed to create contact inquiry"));
        }

        Ok(created.swap_remove(0))
    }

    async fn list_contact_inquiries(
        &self,
        status: Option<InquiryStatus>,
        auth_token: &str,
    ) -> Result<Vec<ContactInquiry>> {
        let mut path = "/rest/v1/contact_inquiries?order=createdAt.desc".to_string();
        if let Some(status) = status {
            path.push_str(&format!("&status=eq.{}", status.as_str()));
        }

        self.request(Method::GET, &path, Some(auth_token), None).await
    }
}
