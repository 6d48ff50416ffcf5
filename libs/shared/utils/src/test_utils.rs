use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use uuid::Uuid;

use shared_config::{AppConfig, DeploymentType};
use shared_database::ClinicStore;
use shared_models::auth::{User, UserProfile};
use shared_models::clinic::{ContactInquiry, InquiryStatus, Provider, Service};

use crate::state::AppState;

pub struct TestConfig {
    pub jwt_secret: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub deployment: DeploymentType,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            deployment: DeploymentType::Patient,
        }
    }
}

impl TestConfig {
    pub fn patient() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        Self {
            deployment: DeploymentType::Admin,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            supabase_jwt_secret: self.jwt_secret.clone(),
            deployment: self.deployment,
            debug_endpoints: false,
            port: 3000,
        }
    }

    pub fn to_state(&self, store: MockClinicStore) -> AppState {
        AppState::with_store(self.to_app_config(), Arc::new(store))
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role: "patient".to_string(),
        }
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    pub fn patient(email: &str) -> Self {
        Self::new(email, "patient")
    }

    pub fn admin(email: &str) -> Self {
        Self::new(email, "admin")
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: Some(self.email.clone()),
            role: Some("authenticated".to_string()),
            metadata: None,
            created_at: Some(Utc::now()),
        }
    }

    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            email: Some(self.email.clone()),
            display_name: None,
            role: Some(self.role.clone()),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        // The identity provider always issues "authenticated"; clinic roles live in the profile.
        let payload = json!({
            "sub": user.id,
            "email": user.email,
            "role": "authenticated",
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

pub struct TestFixtures;

impl TestFixtures {
    pub fn service(id: &str, name: &str) -> Service {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} appointment", name),
            duration: 60,
            price: 120.0,
            category: "General".to_string(),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn provider(
        id: &str,
        name: &str,
        specialty: &str,
        rating: Option<f64>,
        years_of_experience: i32,
        service_ids: &[&str],
    ) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            title: "DDS".to_string(),
            specialty: specialty.to_string(),
            bio: String::new(),
            image_url: String::new(),
            email: format!("{}@clinic.test", id),
            phone: String::new(),
            years_of_experience,
            service_ids: service_ids.iter().map(|s| s.to_string()).collect(),
            rating,
            total_reviews: None,
            education: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            specializations: Vec::new(),
            accepting_new_patients: Some(true),
            created_at: None,
            updated_at: None,
        }
    }
}

/// In-memory `ClinicStore` with switchable failures.
#[derive(Default)]
pub struct MockClinicStore {
    services: HashMap<String, Service>,
    providers: Vec<Provider>,
    profiles: HashMap<String, UserProfile>,
    inquiries: Mutex<Vec<ContactInquiry>>,
    fail_services: bool,
    fail_providers: bool,
    fail_profiles: bool,
}

impl MockClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.insert(service.id.clone(), service);
        self
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profiles.insert(profile.id.clone(), profile);
        self
    }

    pub fn with_inquiry(self, inquiry: ContactInquiry) -> Self {
        self.inquiries.lock().unwrap().push(inquiry);
        self
    }

    pub fn failing_services(mut self) -> Self {
        self.fail_services = true;
        self
    }

    pub fn failing_providers(mut self) -> Self {
        self.fail_providers = true;
        self
    }

    pub fn failing_profiles(mut self) -> Self {
        self.fail_profiles = true;
        self
    }

    pub fn inquiries(&self) -> Vec<ContactInquiry> {
        self.inquiries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClinicStore for MockClinicStore {
    async fn get_service(&self, service_id: &str) -> Result<Option<Service>> {
        if self.fail_services {
            return Err(anyhow!("API error (503): services unavailable"));
        }
        Ok(self.services.get(service_id).cloned())
    }

    async fn get_providers_by_service(&self, service_id: &str) -> Result<Vec<Provider>> {
        if self.fail_providers {
            return Err(anyhow!("API error (503): providers unavailable"));
        }
        Ok(self
            .providers
            .iter()
            .filter(|p| p.offers(service_id))
            .cloned()
            .collect())
    }

    async fn get_user_profile(&self, user_id: &str, _auth_token: &str) -> Result<Option<UserProfile>> {
        if self.fail_profiles {
            return Err(anyhow!("API error (503): profiles unavailable"));
        }
        Ok(self.profiles.get(user_id).cloned())
    }

    async fn create_contact_inquiry(&self, inquiry: &ContactInquiry) -> Result<ContactInquiry> {
        self.inquiries.lock().unwrap().push(inquiry.clone());
        Ok(inquiry.clone())
    }

    async fn list_contact_inquiries(
        &self,
        status: Option<InquiryStatus>,
        _auth_token: &str,
    ) -> Result<Vec<ContactInquiry>> {
        Ok(self
            .inquiries
            .lock()
            .unwrap()
            .iter()
            .filter(|i| status.map_or(true, |s| i.status == s))
            .cloned()
            .collect())
    }
}
