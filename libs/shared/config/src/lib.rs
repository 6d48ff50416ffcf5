use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod deployment;

pub use deployment::{DeploymentMarker, DeploymentType, DEFAULT_MARKER_PATH};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_jwt_secret: String,
    pub deployment: DeploymentType,
    pub debug_endpoints: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let deployment_marker_path = env::var("CLINIC_DEPLOYMENT_MARKER")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MARKER_PATH));

        let deployment = DeploymentType::from_env_or_marker(
            env::var("CLINIC_DEPLOYMENT_TYPE").ok().as_deref(),
            &deployment_marker_path,
        );

        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            supabase_jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_JWT_SECRET not set, using empty value");
                    String::new()
                }),
            deployment,
            debug_endpoints: env::var("CLINIC_DEBUG_ENDPOINTS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, using default 3000");
                    3000
                }),
        };

        info!("Deployment mode resolved to {}", config.deployment);

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_anon_key.is_empty()
            && !self.supabase_jwt_secret.is_empty()
    }
}
