pub mod handlers;
pub mod models;
pub mod router;
pub mod validation;
