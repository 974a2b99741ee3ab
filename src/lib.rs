//! vulnscan - dependency vulnerability scan service
//!
//! Accepts Python requirements manifests, checks every pinned dependency
//! against an OSV-compatible vulnerability service, and keeps the scanned
//! applications in an in-process registry that answers cross-application
//! dependency queries.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **Domain** (`scanning::domain`): vulnerability/package/application
//!   types and the manifest parser, free of I/O
//! - **Domain services** (`scanning::services`): dependency aggregation
//! - **Application** (`application`): use cases, DTOs and the store
//! - **Ports** (`ports`): interfaces for infrastructure
//! - **Adapters** (`adapters`): the OSV HTTP client
//! - **Presentation** (`presentation`): the axum route layer
//!
//! # Example
//!
//! ```no_run
//! use vulnscan::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let settings = Settings::from_env()?;
//! let repository: DynVulnerabilityRepository = Arc::new(OsvClient::new(
//!     settings.scanner_endpoint.clone(),
//!     settings.lookup_timeout,
//! )?);
//!
//! let store = Arc::new(ApplicationStore::new());
//! let scanner = ScanManifestUseCase::new(repository, settings.max_concurrent_lookups);
//! let state = AppState {
//!     create_application: Arc::new(CreateApplicationUseCase::new(scanner, store.clone())),
//!     queries: Arc::new(ApplicationQueries::new(store)),
//!     project_name: settings.project_name.clone(),
//! };
//!
//! let router = create_router(state);
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod presentation;
pub mod scanning;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::OsvClient;
    pub use crate::application::dto::{ApplicationDependencies, ApplicationSummary};
    pub use crate::application::store::ApplicationStore;
    pub use crate::application::use_cases::{
        ApplicationQueries, CreateApplicationUseCase, ScanManifestUseCase,
    };
    pub use crate::config::Settings;
    pub use crate::ports::outbound::{LookupResult, VulnerabilityRepository};
    pub use crate::presentation::{create_router, AppState, DynVulnerabilityRepository};
    pub use crate::scanning::domain::{
        parse_manifest, Application, Dependency, Package, Vulnerability,
    };
    pub use crate::scanning::services::{
        ApplicationUsage, DependencyAggregator, DependencyDetail, DependencyRecord, PackageSummary,
    };
    pub use crate::shared::{Result, ScanServiceError};
}
