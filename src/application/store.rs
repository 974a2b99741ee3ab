use crate::scanning::domain::{Application, Package};
use crate::shared::ScanServiceError;
use std::sync::RwLock;

/// In-process registry of scanned applications.
///
/// Append-only for the process lifetime: no update or delete is defined.
/// Insertion order is preserved and is the iteration order for listing.
/// The uniqueness check and the insert happen under one write guard, so
/// concurrent create requests for the same name yield exactly one winner.
/// Applications are constructed off-store and inserted as a complete unit;
/// readers never observe a partially built entry.
#[derive(Debug, Default)]
pub struct ApplicationStore {
    applications: RwLock<Vec<Application>>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new application built from one manifest scan.
    ///
    /// Fails with `DuplicateApplication` when the name is already taken,
    /// leaving the existing entry untouched.
    pub fn create(
        &self,
        name: String,
        description: Option<String>,
        packages: Vec<Package>,
    ) -> Result<Application, ScanServiceError> {
        let mut applications = self.applications.write().expect("store lock poisoned");

        if applications.iter().any(|app| app.name() == name) {
            return Err(ScanServiceError::DuplicateApplication { name });
        }

        let application = Application::new(name, description, packages);
        applications.push(application.clone());
        Ok(application)
    }

    /// Whether an application with this name is already registered.
    pub fn contains(&self, name: &str) -> bool {
        self.applications
            .read()
            .expect("store lock poisoned")
            .iter()
            .any(|app| app.name() == name)
    }

    /// Snapshot of all applications in insertion order. An empty store is a
    /// valid answer; callers decide what "no applications" means.
    pub fn get_all(&self) -> Vec<Application> {
        self.applications
            .read()
            .expect("store lock poisoned")
            .clone()
    }

    pub fn get_by_name(&self, name: &str) -> Option<Application> {
        self.applications
            .read()
            .expect("store lock poisoned")
            .iter()
            .find(|app| app.name() == name)
            .cloned()
    }
}
