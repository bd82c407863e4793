/// Application entity: one scanned application (or branch of one) and the
/// dependency keys its latest report references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    name: String,
    app_id: String,
    branch_id: Option<String>,
    report_id: Option<String>,
    dependency_keys: Vec<String>,
    loaded: bool,
}

impl Application {
    pub fn new(name: String, app_id: String, branch_id: Option<String>) -> Self {
        Self {
            name,
            app_id,
            branch_id: branch_id.filter(|b| !b.is_empty()),
            report_id: None,
            dependency_keys: Vec::new(),
            loaded: false,
        }
    }

    /// Catalog key: the branch id when present, otherwise the name
    pub fn key(&self) -> &str {
        self.branch_id.as_deref().unwrap_or(&self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.branch_id.as_deref()
    }

    pub fn report_id(&self) -> Option<&str> {
        self.report_id.as_deref()
    }

    pub fn set_report_id(&mut self, report_id: String) {
        self.report_id = Some(report_id);
    }

    /// Dependency keys in the order they were added
    pub fn dependency_keys(&self) -> &[String] {
        &self.dependency_keys
    }

    /// Whether the license data of this application was read
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Appends a dependency key. The key must already exist in the
    /// dependency catalog.
    pub fn add_dependency_key(&mut self, key: String) {
        self.dependency_keys.push(key);
    }
}
