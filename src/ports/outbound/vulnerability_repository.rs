use crate::scanning::domain::Vulnerability;
use async_trait::async_trait;
use std::sync::Arc;

/// Outcome of one vulnerability lookup.
///
/// A lookup never escapes as a fault: a non-success status or a network
/// failure becomes `ServiceError` and is absorbed by the scan orchestrator
/// into that dependency's result. `Found` with an empty list means the
/// service knows the package and reports nothing for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(Vec<Vulnerability>),
    ServiceError(String),
}

/// VulnerabilityRepository port for querying the external vulnerability
/// service.
///
/// One request per `lookup` call; no batching and no client-side retry.
/// Retry policy, if any, belongs to the caller. Implementations must be
/// `Send + Sync` so lookups can fan out concurrently.
#[async_trait]
pub trait VulnerabilityRepository: Send + Sync {
    /// Queries known vulnerabilities for one package@version.
    async fn lookup(&self, package_name: &str, version: &str) -> LookupResult;
}

// Lets shared handles (the router state holds one) stand in wherever an
// owned repository is expected.
#[async_trait]
impl<R: VulnerabilityRepository + ?Sized> VulnerabilityRepository for Arc<R> {
    async fn lookup(&self, package_name: &str, version: &str) -> LookupResult {
        (**self).lookup(package_name, version).await
    }
}
