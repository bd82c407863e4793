use crate::license_compliance::domain::Application;
use std::collections::BTreeMap;

/// Registry of applications for one organization, keyed by branch id or
/// application name.
#[derive(Debug)]
pub struct ApplicationCatalog {
    organization_id: String,
    applications: BTreeMap<String, Application>,
}

impl ApplicationCatalog {
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            applications: BTreeMap::new(),
        }
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    /// Adds an application, replacing any previous one with the same key.
    /// Returns the catalog key.
    pub fn add(&mut self, application: Application) -> String {
        let key = application.key().to_string();
        if self.applications.insert(key.clone(), application).is_some() {
            tracing::debug!(key = %key, "replacing application");
        }
        key
    }

    pub fn get(&self, key: &str) -> Option<&Application> {
        self.applications.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Application> {
        self.applications.get_mut(key)
    }

    /// Application keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        self.applications.keys().cloned().collect()
    }

    /// Applications in key order
    pub fn list_all(&self) -> impl Iterator<Item = &Application> {
        self.applications.values()
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
