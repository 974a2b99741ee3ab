use super::vulnerability::Vulnerability;

/// Version string recorded for manifest entries that declare no version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Annotation attached to entries whose manifest line carried no version.
pub const VERSION_NOT_SPECIFIED: &str = "version not specified";

/// A dependency after being scanned, carrying zero or more vulnerabilities.
///
/// Identity is the `(name, version)` pair and is fixed at creation. A failed
/// or skipped lookup is recorded in `error`; such a package keeps an empty
/// vulnerability list and does not abort the scan it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    version: String,
    vulnerabilities: Vec<Vulnerability>,
    error: Option<String>,
}

impl Package {
    /// A successfully scanned package.
    pub fn scanned(name: String, version: String, vulnerabilities: Vec<Vulnerability>) -> Self {
        Self {
            name,
            version,
            vulnerabilities,
            error: None,
        }
    }

    /// A package whose lookup failed; the error message is kept in place of
    /// vulnerability data.
    pub fn failed(name: String, version: String, error: String) -> Self {
        Self {
            name,
            version,
            vulnerabilities: Vec::new(),
            error: Some(error),
        }
    }

    /// A manifest entry that declared no version. No lookup is performed for
    /// these; the version is recorded as `"unknown"`.
    pub fn unversioned(name: String) -> Self {
        Self::failed(
            name,
            UNKNOWN_VERSION.to_string(),
            VERSION_NOT_SPECIFIED.to_string(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Derived, never stored: a package is vulnerable exactly when its
    /// vulnerability list is non-empty.
    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }

    /// The `name==version` key used to merge the same package across
    /// applications.
    pub fn dependency_key(&self) -> String {
        format!("{}=={}", self.name, self.version)
    }
}
