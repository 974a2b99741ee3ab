use thiserror::Error;

/// Service-level errors for the scan-and-aggregate pipeline.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Only fatal outcomes live here: a failed lookup for a single dependency
/// is recorded inside that dependency's scan result and never surfaces as
/// an error value.
#[derive(Debug, Error)]
pub enum ScanServiceError {
    /// An application with the requested name is already registered.
    /// The scan work performed for the request is discarded.
    #[error("Application with name '{name}' already exists.")]
    DuplicateApplication { name: String },

    /// The requested application is not registered.
    #[error("Application '{name}' not found.")]
    ApplicationNotFound { name: String },

    /// No stored application declares the requested package@version pair.
    #[error("Dependency '{name}=={version}' not found in any application.")]
    DependencyNotFound { name: String, version: String },

    /// The submitted manifest could not be decoded as text. Fatal to the
    /// whole create operation; nothing is stored.
    #[error("Failed to read the requirements file: {details}")]
    ManifestUnreadable { details: String },

    /// The upload itself was malformed (missing form field, wrong declared
    /// content type). Raised by the route layer before any scan work.
    #[error("Invalid upload: {reason}")]
    InvalidUpload { reason: String },
}
