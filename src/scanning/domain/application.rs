use super::package::Package;

/// An application created from one manifest scan.
///
/// Names are unique across the store; the package list is fixed at creation.
/// Rescanning or mutating a stored application is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    name: String,
    description: Option<String>,
    packages: Vec<Package>,
}

impl Application {
    pub fn new(name: String, description: Option<String>, packages: Vec<Package>) -> Self {
        Self {
            name,
            description,
            packages,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// An application is vulnerable when any of its packages is.
    pub fn is_vulnerable(&self) -> bool {
        self.packages.iter().any(Package::is_vulnerable)
    }
}
