/// Application use cases: manifest scanning, application creation, queries.
pub mod create_application;
pub mod queries;
pub mod scan_manifest;

pub use create_application::CreateApplicationUseCase;
pub use queries::ApplicationQueries;
pub use scan_manifest::ScanManifestUseCase;
