use crate::application::store::ApplicationStore;
use crate::application::use_cases::ScanManifestUseCase;
use crate::ports::outbound::VulnerabilityRepository;
use crate::scanning::domain::Application;
use crate::shared::ScanServiceError;
use std::sync::Arc;

/// CreateApplicationUseCase - scans one manifest and registers the result.
///
/// Either fully succeeds (application stored, possibly with some packages
/// annotated with lookup errors) or fully fails with nothing stored. The
/// store's atomic check-and-insert is the authority on name uniqueness; the
/// early `contains` check only spares the scan work for the common
/// duplicate case.
pub struct CreateApplicationUseCase<R: VulnerabilityRepository> {
    scanner: ScanManifestUseCase<R>,
    store: Arc<ApplicationStore>,
}

impl<R: VulnerabilityRepository> CreateApplicationUseCase<R> {
    pub fn new(scanner: ScanManifestUseCase<R>, store: Arc<ApplicationStore>) -> Self {
        Self { scanner, store }
    }

    /// # Arguments
    /// * `name` - Unique application name
    /// * `description` - Optional free-form description
    /// * `manifest_text` - Decoded requirements file content
    pub async fn execute(
        &self,
        name: String,
        description: Option<String>,
        manifest_text: &str,
    ) -> Result<Application, ScanServiceError> {
        if self.store.contains(&name) {
            tracing::warn!(application = %name, "application already exists");
            return Err(ScanServiceError::DuplicateApplication { name });
        }

        tracing::info!(application = %name, "scanning dependencies for vulnerabilities");
        let packages = self.scanner.scan(manifest_text).await;
        tracing::info!(
            application = %name,
            packages = packages.len(),
            "scan finished, registering application"
        );

        self.store.create(name, description, packages)
    }
}
