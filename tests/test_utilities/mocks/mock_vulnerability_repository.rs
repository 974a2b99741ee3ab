use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vulnscan::prelude::*;

/// Mock VulnerabilityRepository with canned per-package outcomes.
///
/// Unknown packages answer `Found([])` ("known, not vulnerable"). Every
/// lookup is recorded so tests can assert which packages were actually
/// queried. Optional per-package delays force completion order to differ
/// from declaration order.
#[derive(Default)]
pub struct MockVulnerabilityRepository {
    outcomes: HashMap<String, LookupResult>,
    delays: HashMap<String, Duration>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockVulnerabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vulnerability(self, name: &str, version: &str, id: &str) -> Self {
        self.with_full_vulnerability(name, version, id, None, None)
    }

    pub fn with_full_vulnerability(
        mut self,
        name: &str,
        version: &str,
        id: &str,
        summary: Option<&str>,
        details: Option<&str>,
    ) -> Self {
        let vuln = Vulnerability::new(
            id.to_string(),
            summary.map(str::to_string),
            details.map(str::to_string),
        );
        let key = key_of(name, version);
        match self.outcomes.get_mut(&key) {
            Some(LookupResult::Found(vulns)) => vulns.push(vuln),
            _ => {
                self.outcomes.insert(key, LookupResult::Found(vec![vuln]));
            }
        }
        self
    }

    pub fn with_error(mut self, name: &str, version: &str, message: &str) -> Self {
        self.outcomes.insert(
            key_of(name, version),
            LookupResult::ServiceError(message.to_string()),
        );
        self
    }

    pub fn with_delay(mut self, name: &str, version: &str, delay: Duration) -> Self {
        self.delays.insert(key_of(name, version), delay);
        self
    }

    /// Shared handle on the lookup log, for asserting after the repository
    /// has been moved into a use case.
    pub fn lookup_log(&self) -> Arc<Mutex<Vec<String>>> {
        self.lookups.clone()
    }
}

fn key_of(name: &str, version: &str) -> String {
    format!("{}=={}", name, version)
}

#[async_trait]
impl VulnerabilityRepository for MockVulnerabilityRepository {
    async fn lookup(&self, package_name: &str, version: &str) -> LookupResult {
        let key = key_of(package_name, version);
        self.lookups.lock().unwrap().push(key.clone());

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        self.outcomes
            .get(&key)
            .cloned()
            .unwrap_or(LookupResult::Found(vec![]))
    }
}
