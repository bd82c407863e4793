use crate::license_compliance::catalog::DependencyCatalog;
use crate::license_compliance::domain::{Application, Dependency, LicenseCategory};
use crate::license_compliance::policies::LicenseConversion;
use crate::license_compliance::services::LicenseCategorizer;
use std::collections::BTreeMap;

/// Expression recorded for dependencies without a resolvable license
pub const NOT_FOUND_EXPRESSION: &str = "NOT FOUND";

/// Placeholder rendered in application rows for unresolvable dependencies
pub const NOT_AVAILABLE: &str = "N/A";

/// Dependencies grouped by category and then by license expression
pub type CategoryMap<'a> = BTreeMap<LicenseCategory, BTreeMap<String, Vec<&'a Dependency>>>;

/// Result of rolling the whole dependency catalog up by license
#[derive(Debug, Default)]
pub struct LicenseSummary<'a> {
    /// category -> expression -> dependencies, all in sorted order
    pub categories: CategoryMap<'a>,
    /// expression -> number of dependencies carrying it
    pub counts: BTreeMap<String, usize>,
}

impl LicenseSummary<'_> {
    pub fn count_for(&self, expression: &str) -> usize {
        self.counts.get(expression).copied().unwrap_or(0)
    }
}

/// One row of an application's dependency listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    pub threat: String,
    pub threat_score: Option<u32>,
    pub license_expression: String,
    pub status: String,
    pub coordinate_key: String,
    /// Normalized declared/observed/effective expression; `None` when unresolvable
    pub detected_licenses: Option<String>,
}

/// LicenseAggregator service rolling dependencies up into category
/// summaries and per-application rows.
pub struct LicenseAggregator;

impl LicenseAggregator {
    /// Resolves, converts and categorizes every dependency in the catalog.
    ///
    /// A dependency with no license information, or an empty authoritative
    /// license list, is recorded as `"NOT FOUND"` under `LicenseCategory::NotFound`.
    pub fn collect_all_licenses(catalog: &DependencyCatalog) -> LicenseSummary<'_> {
        let mut summary = LicenseSummary::default();

        for dependency in catalog.list_all() {
            let info = catalog.resolve_best_license_info(&dependency.key());
            let (expression, category) = match info {
                Some(info) if !info.licenses().is_empty() => {
                    let converted = LicenseConversion::convert(&info.joined_expression()).to_string();
                    let category = LicenseCategorizer::categorize(&converted);
                    (converted, category)
                }
                _ => (NOT_FOUND_EXPRESSION.to_string(), LicenseCategory::NotFound),
            };

            *summary.counts.entry(expression.clone()).or_insert(0) += 1;
            summary
                .categories
                .entry(category)
                .or_default()
                .entry(expression)
                .or_default()
                .push(dependency);
        }

        summary
    }

    /// Builds the dependency rows of one application, sorted by coordinate key.
    ///
    /// Keys missing from the catalog render `"N/A"` for threat, licenses and status.
    pub fn application_rows(
        application: &Application,
        catalog: &DependencyCatalog,
    ) -> Vec<ApplicationRow> {
        let mut keys: Vec<&String> = application.dependency_keys().iter().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                match (
                    catalog.resolve_best_license_info(key),
                    catalog.get_by_key(key),
                ) {
                    (Some(info), Some(dependency)) => ApplicationRow {
                        threat: info.threat().to_string(),
                        threat_score: info.threat().score(),
                        license_expression: info.joined_expression(),
                        status: info.status().to_string(),
                        coordinate_key: key.clone(),
                        detected_licenses: Some(dependency.detected_license_expression()),
                    },
                    _ => ApplicationRow {
                        threat: NOT_AVAILABLE.to_string(),
                        threat_score: None,
                        license_expression: NOT_AVAILABLE.to_string(),
                        status: NOT_AVAILABLE.to_string(),
                        coordinate_key: key.clone(),
                        detected_licenses: None,
                    },
                }
            })
            .collect()
    }
}
