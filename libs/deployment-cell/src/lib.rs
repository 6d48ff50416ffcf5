pub mod gate;
pub mod handlers;
pub mod models;
pub mod router;
pub mod routes;

// The resolver lives with the config so the mode can be fixed at startup.
pub use shared_config::deployment::{resolve_deployment_type, DeploymentMarker, DeploymentType};
pub use routes::{allowed_routes, is_route_allowed, ADMIN_ROUTES, PATIENT_ROUTES};
