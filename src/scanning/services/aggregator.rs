//! Cross-application dependency aggregation.
//!
//! Every view here is computed fresh from a snapshot of the stored
//! applications; no incremental index is maintained. The store is small and
//! process-local, so recomputation is preferred over cache invalidation.

use crate::scanning::domain::{Application, Package, Vulnerability};
use std::collections::HashMap;

/// One distinct `(name, version)` pair across all applications, with the
/// vulnerability sequences of every occurrence concatenated. Duplicates
/// across applications are kept: a vulnerability reported by two
/// applications for the same package@version appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
    pub vulnerabilities: Vec<Vulnerability>,
}

impl DependencyRecord {
    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }
}

/// An application that declares a given dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationUsage {
    pub application_name: String,
    pub application_description: Option<String>,
}

/// Detail view of a single dependency: merged vulnerabilities plus the
/// applications that declare it, in store iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDetail {
    pub name: String,
    pub version: String,
    pub vulnerabilities: Vec<Vulnerability>,
    pub usage: Vec<ApplicationUsage>,
}

impl DependencyDetail {
    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }
}

/// Summary of one package of one application. Deliberately carries no
/// vulnerability detail; that belongs to the single-dependency view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub name: String,
    pub version: String,
    pub is_vulnerable: bool,
}

/// Derives deduplicated dependency views from stored applications.
pub struct DependencyAggregator;

impl DependencyAggregator {
    /// Lists one record per distinct `(name, version)` across all
    /// applications.
    ///
    /// Ordering: keys appear in the order they were first encountered while
    /// walking applications in store order and each application's packages
    /// in declaration order. Later occurrences of a key only extend its
    /// vulnerability sequence, in that same encounter order.
    pub fn list_dependencies(applications: &[Application]) -> Vec<DependencyRecord> {
        let mut records: Vec<DependencyRecord> = Vec::new();
        let mut index_by_key: HashMap<String, usize> = HashMap::new();

        for application in applications {
            for package in application.packages() {
                match index_by_key.get(&package.dependency_key()) {
                    Some(&i) => {
                        records[i]
                            .vulnerabilities
                            .extend(package.vulnerabilities().iter().cloned());
                    }
                    None => {
                        index_by_key.insert(package.dependency_key(), records.len());
                        records.push(DependencyRecord {
                            name: package.name().to_string(),
                            version: package.version().to_string(),
                            vulnerabilities: package.vulnerabilities().to_vec(),
                        });
                    }
                }
            }
        }

        records
    }

    /// Looks up one dependency by its exact `(name, version)` pair.
    ///
    /// Returns `None` when no application declares the pair. On success the
    /// vulnerability sequence is the same concatenation `list_dependencies`
    /// produces, and `usage` lists declaring applications in store order.
    pub fn find_dependency(
        applications: &[Application],
        name: &str,
        version: &str,
    ) -> Option<DependencyDetail> {
        let mut usage = Vec::new();
        let mut vulnerabilities = Vec::new();

        for application in applications {
            let mut declared = false;
            for package in application.packages() {
                if package.name() == name && package.version() == version {
                    declared = true;
                    vulnerabilities.extend(package.vulnerabilities().iter().cloned());
                }
            }
            if declared {
                usage.push(ApplicationUsage {
                    application_name: application.name().to_string(),
                    application_description: application.description().map(str::to_string),
                });
            }
        }

        if usage.is_empty() {
            return None;
        }

        Some(DependencyDetail {
            name: name.to_string(),
            version: version.to_string(),
            vulnerabilities,
            usage,
        })
    }

    /// Summarizes every package of one application: name, version and the
    /// derived vulnerable flag only.
    pub fn application_dependencies(application: &Application) -> Vec<PackageSummary> {
        application
            .packages()
            .iter()
            .map(|package: &Package| PackageSummary {
                name: package.name().to_string(),
                version: package.version().to_string(),
                is_vulnerable: package.is_vulnerable(),
            })
            .collect()
    }
}
