use shared_config::DeploymentType;

/// Page prefixes served by the patient booking site.
pub const PATIENT_ROUTES: &[&str] = &[
    "/",
    "/about",
    "/services",
    "/gallery",
    "/contact",
    "/booking",
    "/booking/provider",
    "/booking/datetime",
    "/booking/confirm",
    "/booking/success",
    "/auth/login",
    "/auth/signup",
    "/auth/forgot-password",
];

/// Page prefixes served by the admin panel.
pub const ADMIN_ROUTES: &[&str] = &[
    "/",
    "/dashboard",
    "/appointments",
    "/patients",
    "/providers",
    "/manage-services",
    "/auth/login",
];

pub fn allowed_routes(deployment: DeploymentType) -> &'static [&'static str] {
    match deployment {
        DeploymentType::Patient => PATIENT_ROUTES,
        DeploymentType::Admin => ADMIN_ROUTES,
    }
}

/// True when `pathname` is an allow-list entry or lies under one. The match
/// needs a `/` boundary, so `/services` does not admit `/servicesx`.
pub fn is_route_allowed(deployment: DeploymentType, pathname: &str) -> bool {
    allowed_routes(deployment).iter().any(|route| {
        pathname == *route
            || pathname
                .strip_prefix(route)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
