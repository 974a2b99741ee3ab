/// Placeholder used when the vulnerability service omits a field.
const MISSING_FIELD: &str = "N/A";

/// A known vulnerability of one package version.
///
/// Immutable record identified by `id`. The upstream service is free to omit
/// `summary` and `details`; both fall back to the `"N/A"` sentinel so report
/// consumers always see a string. Duplicates across packages are allowed and
/// never deduplicated within a single package's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vulnerability {
    id: String,
    summary: String,
    details: String,
}

impl Vulnerability {
    /// Creates a vulnerability record, substituting `"N/A"` for any field
    /// the service left out.
    pub fn new(id: String, summary: Option<String>, details: Option<String>) -> Self {
        Self {
            id,
            summary: summary.unwrap_or_else(|| MISSING_FIELD.to_string()),
            details: details.unwrap_or_else(|| MISSING_FIELD.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}
