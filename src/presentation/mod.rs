/// Presentation layer - the axum route surface over the scan core.
pub mod models;
pub mod routes;

pub use routes::{create_router, AppState, DynVulnerabilityRepository};
