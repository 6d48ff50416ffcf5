use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Marker file written by the deployment switch utility.
pub const DEFAULT_MARKER_PATH: &str = "deployment.config.json";

/// Which half of the clinic this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeploymentType {
    #[default]
    Patient,
    Admin,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::Patient => "PATIENT",
            DeploymentType::Admin => "ADMIN",
        }
    }

    pub fn is_patient(&self) -> bool {
        *self == DeploymentType::Patient
    }

    pub fn is_admin(&self) -> bool {
        *self == DeploymentType::Admin
    }

    pub fn home_url(&self) -> &'static str {
        if self.is_admin() { "/dashboard" } else { "/" }
    }

    pub fn login_redirect_url(&self) -> &'static str {
        if self.is_admin() { "/dashboard" } else { "/" }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            DeploymentType::Patient => "Smile Dental - Your Trusted Dental Care Partner",
            DeploymentType::Admin => "Smile Dental - Admin Panel",
        }
    }

    pub fn page_description(&self) -> &'static str {
        match self {
            DeploymentType::Patient => {
                "Experience exceptional dental care with our expert team. From routine checkups to smile transformations."
            }
            DeploymentType::Admin => "Admin management panel for Smile Dental booking system.",
        }
    }

    /// Navbar and footer are only rendered for patients.
    pub fn shows_patient_layout(&self) -> bool {
        self.is_patient()
    }

    /// Startup resolution: a valid env value wins, otherwise the marker file decides.
    pub fn from_env_or_marker(env_value: Option<&str>, marker_path: &Path) -> Self {
        if let Some(raw) = env_value {
            match raw.parse::<DeploymentType>() {
                Ok(deployment) => {
                    debug!("Deployment type {} taken from environment", deployment);
                    return deployment;
                }
                Err(e) => warn!("{}, falling back to marker file", e),
            }
        }

        resolve_deployment_type(marker_path)
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(DeploymentType::Patient),
            "admin" => Ok(DeploymentType::Admin),
            other => Err(format!("Invalid deployment type: {:?}", other)),
        }
    }
}

/// Reads the marker file. Anything other than `"type": "ADMIN"` means PATIENT,
/// including a missing or malformed file.
pub fn resolve_deployment_type(marker_path: &Path) -> DeploymentType {
    let contents = match fs::read_to_string(marker_path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("No deployment marker at {}: {}", marker_path.display(), e);
            return DeploymentType::Patient;
        }
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(marker) if marker.get("type").and_then(Value::as_str) == Some("ADMIN") => {
            DeploymentType::Admin
        }
        Ok(_) => DeploymentType::Patient,
        Err(e) => {
            debug!("Ignoring malformed deployment marker {}: {}", marker_path.display(), e);
            DeploymentType::Patient
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentMarker {
    #[serde(rename = "type")]
    pub deployment_type: DeploymentType,
    pub timestamp: DateTime<Utc>,
}

impl DeploymentMarker {
    pub fn new(deployment_type: DeploymentType) -> Self {
        Self {
            deployment_type,
            timestamp: Utc::now(),
        }
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_marker_is_patient() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MARKER_PATH);
        assert_eq!(resolve_deployment_type(&path), DeploymentType::Patient);
    }

    #[test]
    fn admin_marker_is_admin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MARKER_PATH);
        fs::write(&path, r#"{"type":"ADMIN","timestamp":"2025-01-01T00:00:00.000Z"}"#).unwrap();

        assert_eq!(resolve_deployment_type(&path), DeploymentType::Admin);
        // Second read without a file change gives the same answer.
        assert_eq!(resolve_deployment_type(&path), DeploymentType::Admin);
    }

    #[test]
    fn malformed_marker_is_patient() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MARKER_PATH);
        fs::write(&path, "{ type: ADMIN").unwrap();
        assert_eq!(resolve_deployment_type(&path), DeploymentType::Patient);
    }

    #[test]
    fn type_comparison_is_exact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MARKER_PATH);
        fs::write(&path, r#"{"type":"admin"}"#).unwrap();
        assert_eq!(resolve_deployment_type(&path), DeploymentType::Patient);
    }

    #[test]
    fn written_marker_round_trips_through_resolver() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MARKER_PATH);
        DeploymentMarker::new(DeploymentType::Admin).write_to(&path).unwrap();
        assert_eq!(resolve_deployment_type(&path), DeploymentType::Admin);
    }

    #[test]
    fn env_value_overrides_marker() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MARKER_PATH);
        DeploymentMarker::new(DeploymentType::Patient).write_to(&path).unwrap();

        assert_eq!(
            DeploymentType::from_env_or_marker(Some("admin"), &path),
            DeploymentType::Admin
        );
        assert_eq!(
            DeploymentType::from_env_or_marker(Some("bogus"), &path),
            DeploymentType::Patient
        );
        assert_eq!(DeploymentType::from_env_or_marker(None, &path), DeploymentType::Patient);
    }

    #[test]
    fn home_urls_follow_mode() {
        assert_eq!(DeploymentType::Admin.home_url(), "/dashboard");
        assert_eq!(DeploymentType::Patient.home_url(), "/");
        assert_eq!(DeploymentType::Admin.login_redirect_url(), "/dashboard");
        assert_eq!(DeploymentType::Patient.login_redirect_url(), "/");
    }
}
