use crate::application::dto::{ApplicationDependencies, ApplicationSummary};
use crate::application::store::ApplicationStore;
use crate::scanning::domain::Application;
use crate::scanning::services::{DependencyAggregator, DependencyDetail, DependencyRecord};
use crate::shared::ScanServiceError;
use std::sync::Arc;

/// ApplicationQueries - read side of the service.
///
/// Every answer is derived from a point-in-time snapshot of the store.
/// An empty store yields empty listings, never an error; only lookups of a
/// specific application or dependency can answer not-found.
pub struct ApplicationQueries {
    store: Arc<ApplicationStore>,
}

impl ApplicationQueries {
    pub fn new(store: Arc<ApplicationStore>) -> Self {
        Self { store }
    }

    /// All applications with their derived vulnerable flag, in store order.
    pub fn list_applications(&self) -> Vec<ApplicationSummary> {
        self.store
            .get_all()
            .iter()
            .map(|application: &Application| ApplicationSummary {
                name: application.name().to_string(),
                description: application.description().map(str::to_string),
                is_vulnerable: application.is_vulnerable(),
            })
            .collect()
    }

    /// Package summaries of one application.
    pub fn application_dependencies(
        &self,
        name: &str,
    ) -> Result<ApplicationDependencies, ScanServiceError> {
        let application =
            self.store
                .get_by_name(name)
                .ok_or_else(|| ScanServiceError::ApplicationNotFound {
                    name: name.to_string(),
                })?;

        Ok(ApplicationDependencies {
            application_name: application.name().to_string(),
            description: application.description().map(str::to_string),
            packages: DependencyAggregator::application_dependencies(&application),
        })
    }

    /// The deduplicated cross-application dependency index.
    pub fn list_dependencies(&self) -> Vec<DependencyRecord> {
        DependencyAggregator::list_dependencies(&self.store.get_all())
    }

    /// Usage and merged vulnerabilities of one `(name, version)` pair.
    pub fn get_dependency(
        &self,
        name: &str,
        version: &str,
    ) -> Result<DependencyDetail, ScanServiceError> {
        DependencyAggregator::find_dependency(&self.store.get_all(), name, version).ok_or_else(
            || ScanServiceError::DependencyNotFound {
                name: name.to_string(),
                version: version.to_string(),
            },
        )
    }
}
