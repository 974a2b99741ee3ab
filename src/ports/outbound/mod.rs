/// Outbound ports (driven ports) - interfaces the application core uses to
/// reach external systems.
pub mod vulnerability_repository;

pub use vulnerability_repository::{LookupResult, VulnerabilityRepository};
