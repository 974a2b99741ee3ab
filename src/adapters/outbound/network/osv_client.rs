use crate::ports::outbound::{LookupResult, VulnerabilityRepository};
use crate::scanning::domain::Vulnerability;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OSV API client for fetching vulnerability data.
///
/// Sends one query per package@version to the configured endpoint
/// (OSV.dev's `/v1/query` by default). Failed requests are not retried;
/// the scan orchestrator owns fault handling per dependency.
pub struct OsvClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OsvClient {
    /// Creates a client with a fixed per-request deadline, so one slow
    /// dependency cannot stall a whole scan indefinitely.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("vulnscan/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, endpoint })
    }

    async fn query(&self, package_name: &str, version: &str) -> Result<Vec<Vulnerability>> {
        let query = OsvQuery {
            package: OsvPackage {
                name: package_name.to_string(),
                ecosystem: "PyPI".to_string(),
            },
            version: version.to_string(),
        };

        let response = self.client.post(&self.endpoint).json(&query).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("OSV API returned status code {}", response.status());
        }

        let body: OsvQueryResponse = response.json().await?;
        Ok(body
            .vulns
            .into_iter()
            .map(|vuln| Vulnerability::new(vuln.id, vuln.summary, vuln.details))
            .collect())
    }
}

#[async_trait]
impl VulnerabilityRepository for OsvClient {
    async fn lookup(&self, package_name: &str, version: &str) -> LookupResult {
        match self.query(package_name, version).await {
            Ok(vulnerabilities) => LookupResult::Found(vulnerabilities),
            Err(e) => LookupResult::ServiceError(format!(
                "Failed to query OSV API for {}=={}: {}",
                package_name, version, e
            )),
        }
    }
}

// OSV API request/response structures

#[derive(Debug, Serialize)]
struct OsvQuery {
    package: OsvPackage,
    version: String,
}

#[derive(Debug, Serialize)]
struct OsvPackage {
    name: String,
    ecosystem: String, // "PyPI"
}

#[derive(Debug, Deserialize)]
struct OsvQueryResponse {
    // Absent when the service knows no vulnerabilities for the query.
    #[serde(default)]
    vulns: Vec<OsvVulnerability>,
}

#[derive(Debug, Deserialize)]
struct OsvVulnerability {
    id: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    details: Option<String>,
}
