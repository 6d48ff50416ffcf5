use serde::Serialize;

use shared_config::DeploymentType;

use crate::routes::allowed_routes;

/// Everything a client needs to lay out chrome for the active mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSettings {
    #[serde(rename = "type")]
    pub deployment_type: DeploymentType,
    pub is_patient: bool,
    pub is_admin: bool,
    pub home_url: &'static str,
    pub login_redirect_url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub show_patient_layout: bool,
    pub allowed_routes: &'static [&'static str],
}

impl From<DeploymentType> for DeploymentSettings {
    fn from(deployment: DeploymentType) -> Self {
        Self {
            deployment_type: deployment,
            is_patient: deployment.is_patient(),
            is_admin: deployment.is_admin(),
            home_url: deployment.home_url(),
            login_redirect_url: deployment.login_redirect_url(),
            title: deployment.page_title(),
            description: deployment.page_description(),
            show_patient_layout: deployment.shows_patient_layout(),
            allowed_routes: allowed_routes(deployment),
        }
    }
}

pub const DEPLOYMENT_ENV_VAR: &str = "CLINIC_DEPLOYMENT_TYPE";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugEnvReport {
    #[serde(rename = "CLINIC_DEPLOYMENT_TYPE")]
    pub deployment_env: Option<String>,
    pub resolved: DeploymentType,
    pub all_env_keys: Vec<String>,
}

impl DebugEnvReport {
    /// Only key names are reported for the wider environment, never values.
    pub fn from_vars<I>(vars: I, resolved: DeploymentType) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut deployment_env = None;
        let mut all_env_keys = Vec::new();

        for (key, value) in vars {
            if key == DEPLOYMENT_ENV_VAR {
                deployment_env = Some(value);
            }
            if key.contains("DEPLOYMENT") || key.contains("NEXT_PUBLIC") {
                all_env_keys.push(key);
            }
        }
        all_env_keys.sort();

        Self {
            deployment_env,
            resolved,
            all_env_keys,
        }
    }
}
