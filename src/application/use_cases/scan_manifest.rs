use crate::ports::outbound::{LookupResult, VulnerabilityRepository};
use crate::scanning::domain::{parse_manifest, Dependency, Package};
use futures::stream::{self, StreamExt};

/// ScanManifestUseCase - fans out vulnerability lookups for one manifest.
///
/// Lookups for the manifest's dependencies are independent, so they run
/// concurrently with bounded parallelism (`max_concurrent_lookups`) instead
/// of head-of-line blocking on one slow call. Completions arrive out of
/// order; results are reassembled by original declaration index so the
/// output always matches manifest order.
///
/// A failed lookup never aborts the scan: the affected entry carries the
/// error message and an empty vulnerability list, all other entries are
/// unaffected.
pub struct ScanManifestUseCase<R: VulnerabilityRepository> {
    repository: R,
    max_concurrent_lookups: usize,
}

impl<R: VulnerabilityRepository> ScanManifestUseCase<R> {
    /// # Arguments
    /// * `repository` - Vulnerability lookup client
    /// * `max_concurrent_lookups` - Fan-out bound, clamped to at least 1
    pub fn new(repository: R, max_concurrent_lookups: usize) -> Self {
        Self {
            repository,
            max_concurrent_lookups: max_concurrent_lookups.max(1),
        }
    }

    /// Scans all dependencies declared in `manifest_text`.
    ///
    /// Returns one package per declared dependency, in declaration order.
    /// Entries without a version are short-circuited to `"unknown"` with a
    /// `version not specified` annotation; no lookup is issued for them.
    pub async fn scan(&self, manifest_text: &str) -> Vec<Package> {
        let dependencies = parse_manifest(manifest_text);
        let count = dependencies.len();

        let mut indexed: Vec<(usize, Package)> = stream::iter(dependencies.into_iter().enumerate())
            .map(|(index, dependency)| async move {
                (index, self.scan_dependency(dependency).await)
            })
            .buffer_unordered(self.max_concurrent_lookups)
            .collect()
            .await;

        // Reassemble by declaration index, not completion time.
        indexed.sort_by_key(|(index, _)| *index);
        debug_assert_eq!(indexed.len(), count);

        indexed.into_iter().map(|(_, package)| package).collect()
    }

    async fn scan_dependency(&self, dependency: Dependency) -> Package {
        let Dependency { name, version } = dependency;

        let Some(version) = version else {
            tracing::debug!(package = %name, "skipping lookup, no version declared");
            return Package::unversioned(name);
        };

        match self.repository.lookup(&name, &version).await {
            LookupResult::Found(vulnerabilities) => {
                Package::scanned(name, version, vulnerabilities)
            }
            LookupResult::ServiceError(message) => {
                tracing::warn!(package = %name, version = %version, error = %message, "lookup failed");
                Package::failed(name, version, message)
            }
        }
    }
}
