//! Wire shapes of the HTTP API.

use crate::application::dto::ApplicationSummary;
use crate::scanning::services::{
    ApplicationUsage, DependencyDetail, DependencyRecord, PackageSummary,
};
use serde::Serialize;

/// Error payload: `{"detail": "..."}` on every non-2xx answer.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: String,
}

#[derive(Debug, Serialize)]
pub struct CreateApplicationResponse {
    pub message: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationSummaryDto {
    pub name: String,
    pub description: Option<String>,
    pub is_vulnerable: bool,
}

impl From<ApplicationSummary> for ApplicationSummaryDto {
    fn from(summary: ApplicationSummary) -> Self {
        Self {
            name: summary.name,
            description: summary.description,
            is_vulnerable: summary.is_vulnerable,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub total_applications: usize,
    pub applications: Vec<ApplicationSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct PackageSummaryDto {
    pub name: String,
    pub version: String,
    pub is_vulnerable: bool,
}

impl From<PackageSummary> for PackageSummaryDto {
    fn from(summary: PackageSummary) -> Self {
        Self {
            name: summary.name,
            version: summary.version,
            is_vulnerable: summary.is_vulnerable,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationDependenciesResponse {
    pub application_name: String,
    pub description: Option<String>,
    /// Only packages with at least one vulnerability.
    pub vulnerable_packages: Vec<PackageSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct DependencyEntryDto {
    pub name: String,
    pub version: String,
    pub is_vulnerable: bool,
}

impl From<DependencyRecord> for DependencyEntryDto {
    fn from(record: DependencyRecord) -> Self {
        Self {
            is_vulnerable: record.is_vulnerable(),
            name: record.name,
            version: record.version,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DependencyListResponse {
    pub total_dependencies: usize,
    pub dependencies: Vec<DependencyEntryDto>,
}

#[derive(Debug, Serialize)]
pub struct VulnerabilityDto {
    pub id: String,
    pub summary: String,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct DependencyDto {
    pub name: String,
    pub version: String,
    pub is_vulnerable: bool,
    pub vulnerabilities: Vec<VulnerabilityDto>,
}

#[derive(Debug, Serialize)]
pub struct UsageDto {
    pub application_name: String,
    pub application_description: Option<String>,
}

impl From<ApplicationUsage> for UsageDto {
    fn from(usage: ApplicationUsage) -> Self {
        Self {
            application_name: usage.application_name,
            application_description: usage.application_description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DependencyDetailResponse {
    pub dependency: DependencyDto,
    pub usage: Vec<UsageDto>,
}

impl From<DependencyDetail> for DependencyDetailResponse {
    fn from(detail: DependencyDetail) -> Self {
        let vulnerabilities = detail
            .vulnerabilities
            .iter()
            .map(|vuln| VulnerabilityDto {
                id: vuln.id().to_string(),
                summary: vuln.summary().to_string(),
                details: vuln.details().to_string(),
            })
            .collect();

        Self {
            dependency: DependencyDto {
                is_vulnerable: detail.is_vulnerable(),
                name: detail.name,
                version: detail.version,
                vulnerabilities,
            },
            usage: detail.usage.into_iter().map(UsageDto::from).collect(),
        }
    }
}
