use crate::license_compliance::domain::{
    Coordinates, Dependency, LicenseInfo, RawDependencyRecord,
};
use crate::license_compliance::policies::LicensePriority;
use crate::shared::error::ReportError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Threat score at or above which a dependency is reported as high-risk
pub const DEFAULT_HIGH_RISK_THRESHOLD: u32 = 8;

/// Registry of Dependency entities keyed by coordinate key.
///
/// Iteration is in key order.
#[derive(Debug, Default)]
pub struct DependencyCatalog {
    dependencies: BTreeMap<String, Dependency>,
}

impl DependencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dependency from a raw export record, or replaces it.
    ///
    /// When the coordinate key already exists the call fails unless
    /// `allow_update` is set, in which case every record-derived field is
    /// replaced by the new record. The set of referencing applications is
    /// kept across updates so that shared dependencies stay attributed to
    /// every application that loaded them.
    ///
    /// # Returns
    /// The coordinate key under which the dependency is stored
    ///
    /// # Errors
    /// - `ReportError::MalformedRecord` if the record is not an object or has no coordinates
    /// - `ReportError::DuplicateDependency` if the key exists and `allow_update` is false
    pub fn add_or_update(
        &mut self,
        raw_record: &Value,
        app_name: Option<&str>,
        allow_update: bool,
    ) -> Result<String, ReportError> {
        let record = RawDependencyRecord::parse(raw_record)?;
        let mut dependency = Dependency::from_record(record)?;
        let key = dependency.key();

        if self.dependencies.contains_key(&key) {
            if !allow_update {
                return Err(ReportError::DuplicateDependency { key });
            }
            if let Some(previous) = self.dependencies.remove(&key) {
                dependency.extend_app_names(previous.app_names().clone());
            }
            tracing::debug!(key = %key, "updating dependency");
        } else {
            tracing::debug!(key = %key, "adding dependency");
        }

        if let Some(app) = app_name {
            dependency.add_app_name(app);
        }

        self.dependencies.insert(key.clone(), dependency);
        Ok(key)
    }

    /// Removes and returns a dependency.
    ///
    /// # Errors
    /// Returns `ReportError::NotFound` if no dependency has these coordinates.
    pub fn remove(
        &mut self,
        group_id: Option<&str>,
        artifact_id: &str,
        version: &str,
    ) -> Result<Dependency, ReportError> {
        let key = Coordinates::key_for(group_id, artifact_id, version);
        self.dependencies
            .remove(&key)
            .ok_or(ReportError::NotFound { key })
    }

    pub fn get(&self, group_id: Option<&str>, artifact_id: &str, version: &str) -> Option<&Dependency> {
        self.get_by_key(&Coordinates::key_for(group_id, artifact_id, version))
    }

    pub fn get_by_key(&self, key: &str) -> Option<&Dependency> {
        self.dependencies.get(key)
    }

    pub fn exists(&self, group_id: Option<&str>, artifact_id: &str, version: &str) -> bool {
        self.get(group_id, artifact_id, version).is_some()
    }

    /// Resolves the authoritative license view of a dependency.
    ///
    /// Returns `None` only when the key is unknown.
    pub fn resolve_best_license_info(&self, key: &str) -> Option<LicenseInfo> {
        self.get_by_key(key).map(LicensePriority::create_license_info)
    }

    /// All dependencies in key order
    pub fn list_all(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.values()
    }

    /// Dependencies whose resolved threat is a computed score of at least
    /// `threshold`. Unscored threats never qualify.
    pub fn list_high_risk(&self, threshold: u32) -> Vec<(&Dependency, LicenseInfo)> {
        self.resolved()
            .filter(|(_, info)| info.threat().is_at_least(threshold))
            .collect()
    }

    /// Dependencies whose resolved threat is `Unsupported` or `Missing`
    pub fn list_unscored(&self) -> Vec<(&Dependency, LicenseInfo)> {
        let unscored: Vec<(&Dependency, LicenseInfo)> = self
            .resolved()
            .filter(|(_, info)| !info.threat().is_known())
            .collect();

        for (dependency, info) in &unscored {
            tracing::warn!(
                key = %dependency.key(),
                threat = %info.threat(),
                "dependency has no threat score and is excluded from the high-risk list"
            );
        }
        unscored
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    fn resolved(&self) -> impl Iterator<Item = (&Dependency, LicenseInfo)> {
        self.dependencies
            .values()
            .map(|dep| (dep, LicensePriority::create_license_info(dep)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_compliance::domain::Threat;
    use serde_json::json;

    fn record_a() -> Value {
        json!({
            "artifactId": "a",
            "version": "1.0",
            "status": "Confirmed",
            "effectiveLicenses": ["MIT", "Apache-2.0"],
            "effectiveLicenseThreat": 2
        })
    }

    fn record_b() -> Value {
        json!({
            "groupId": "g",
            "artifactId": "b",
            "version": "2.0",
            "status": "Overridden",
            "overriddenLicenses": ["GPL-3.0"],
            "effectiveLicenses": ["MIT"],
            "overriddenLicenseThreat": 9,
            "effectiveLicenseThreat": 1
        })
    }

    #[test]
    fn test_add_returns_key() {
        let mut catalog = DependencyCatalog::new();
        let key = catalog.add_or_update(&record_a(), None, false).unwrap();
        assert_eq!(key, "a : 1.0");
        assert!(catalog.exists(None, "a", "1.0"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_without_update_fails() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_a(), None, false).unwrap();
        let err = catalog.add_or_update(&record_a(), None, false).unwrap_err();
        assert_eq!(
            err,
            ReportError::DuplicateDependency {
                key: "a : 1.0".to_string()
            }
        );
    }

    #[test]
    fn test_update_overwrites_record_fields() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_a(), Some("web"), true).unwrap();
        catalog
            .add_or_update(
                &json!({"artifactId": "a", "version": "1.0", "status": "Open"}),
                Some("billing"),
                true,
            )
            .unwrap();

        let dep = catalog.get(None, "a", "1.0").unwrap();
        assert_eq!(dep.status(), "Open");
        assert!(dep.effective_licenses().is_empty());
        assert_eq!(dep.effective_license_threat(), Threat::Missing);
        let apps: Vec<&str> = dep.app_names().iter().map(String::as_str).collect();
        assert_eq!(apps, vec!["billing", "web"]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_b(), Some("web"), true).unwrap();
        let first = catalog.get_by_key("g : b : 2.0").cloned();
        catalog.add_or_update(&record_b(), Some("web"), true).unwrap();
        assert_eq!(catalog.get_by_key("g : b : 2.0").cloned(), first);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_malformed_record() {
        let mut catalog = DependencyCatalog::new();
        let err = catalog
            .add_or_update(&json!({"status": "Open"}), None, true)
            .unwrap_err();
        assert!(matches!(err, ReportError::MalformedRecord { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_b(), None, false).unwrap();
        let removed = catalog.remove(Some("g"), "b", "2.0").unwrap();
        assert_eq!(removed.key(), "g : b : 2.0");
        assert!(!catalog.exists(Some("g"), "b", "2.0"));

        let err = catalog.remove(Some("g"), "b", "2.0").unwrap_err();
        assert!(matches!(err, ReportError::NotFound { .. }));
    }

    #[test]
    fn test_resolve_best_license_info() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_a(), None, false).unwrap();
        catalog.add_or_update(&record_b(), None, false).unwrap();

        let a = catalog.resolve_best_license_info("a : 1.0").unwrap();
        assert_eq!(a.licenses(), &["Apache-2.0", "MIT"]);
        assert_eq!(a.threat(), Threat::Known(2));
        assert_eq!(a.status(), "Confirmed");

        let b = catalog.resolve_best_license_info("g : b : 2.0").unwrap();
        assert_eq!(b.licenses(), &["GPL-3.0"]);
        assert_eq!(b.threat(), Threat::Known(9));

        assert!(catalog.resolve_best_license_info("missing : 1").is_none());
    }

    #[test]
    fn test_resolution_is_pure() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_b(), None, false).unwrap();
        assert_eq!(
            catalog.resolve_best_license_info("g : b : 2.0"),
            catalog.resolve_best_license_info("g : b : 2.0")
        );
    }

    #[test]
    fn test_list_high_risk() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_a(), None, false).unwrap();
        catalog.add_or_update(&record_b(), None, false).unwrap();

        let high = catalog.list_high_risk(DEFAULT_HIGH_RISK_THRESHOLD);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].0.key(), "g : b : 2.0");
        assert_eq!(high[0].1.threat(), Threat::Known(9));

        assert_eq!(catalog.list_high_risk(0).len(), 2);
    }

    #[test]
    fn test_unscored_never_high_risk() {
        let mut catalog = DependencyCatalog::new();
        catalog
            .add_or_update(
                &json!({"artifactId": "u", "version": "1", "effectiveLicenseThreat": null}),
                None,
                false,
            )
            .unwrap();
        catalog
            .add_or_update(&json!({"artifactId": "m", "version": "1"}), None, false)
            .unwrap();

        assert!(catalog.list_high_risk(0).is_empty());
        let unscored = catalog.list_unscored();
        let keys: Vec<String> = unscored.iter().map(|(d, _)| d.key()).collect();
        assert_eq!(keys, vec!["m : 1", "u : 1"]);
    }

    #[test]
    fn test_list_all_in_key_order() {
        let mut catalog = DependencyCatalog::new();
        catalog.add_or_update(&record_b(), None, false).unwrap();
        catalog.add_or_update(&record_a(), None, false).unwrap();
        let keys: Vec<String> = catalog.list_all().map(Dependency::key).collect();
        assert_eq!(keys, vec!["a : 1.0", "g : b : 2.0"]);
    }
}
