pub mod guard;
pub mod handlers;
pub mod models;
pub mod router;
pub mod session;

pub use guard::{admin_guard, authorize, AccessDecision, AdminGuard, GuardState};
pub use session::resolve_session;
