//! Internal DTOs of the application layer.
//!
//! These carry query answers across the application boundary; the
//! presentation layer maps them onto wire shapes.

use crate::scanning::services::PackageSummary;

/// One application with its derived vulnerable flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub name: String,
    pub description: Option<String>,
    pub is_vulnerable: bool,
}

/// Package summaries of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDependencies {
    pub application_name: String,
    pub description: Option<String>,
    pub packages: Vec<PackageSummary>,
}
