use serde::{Deserialize, Serialize};

use shared_config::DeploymentType;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub requested_path: String,
    pub allowed: bool,
    pub redirect_to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub deployment: DeploymentType,
    /// Where to go after signing in.
    pub redirect: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub sections: Vec<&'static str>,
}
