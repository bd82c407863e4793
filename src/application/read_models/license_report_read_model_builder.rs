//! Builder for constructing LicenseReportReadModel from the catalogs

use super::application_report_view::{ApplicationReportView, DependencyRowView};
use super::high_risk_view::{HighRiskEntryView, HighRiskView, UnscoredEntryView};
use super::license_report_read_model::{LicenseReportReadModel, ReportMetadataView};
use super::license_summary_view::{CategoryView, ExpressionView, LicenseSummaryView};
use crate::license_compliance::catalog::{ApplicationCatalog, DependencyCatalog};
use crate::license_compliance::domain::{Dependency, ReportMetadata};
use crate::license_compliance::services::LicenseAggregator;

/// Builder for constructing LicenseReportReadModel from the catalogs
///
/// Reporting code only goes through catalog accessors and the aggregation
/// service; nothing here mutates the catalogs.
pub struct LicenseReportReadModelBuilder;

impl LicenseReportReadModelBuilder {
    /// Builds the read model for a whole reporting run
    ///
    /// # Arguments
    /// * `metadata` - Run metadata (timestamp, tool, run id)
    /// * `applications` - Loaded applications
    /// * `dependencies` - Loaded dependencies
    /// * `high_risk_threshold` - Minimum threat score listed as high-risk
    pub fn build(
        metadata: &ReportMetadata,
        applications: &ApplicationCatalog,
        dependencies: &DependencyCatalog,
        high_risk_threshold: u32,
    ) -> LicenseReportReadModel {
        LicenseReportReadModel {
            metadata: Self::build_metadata(metadata, dependencies.len()),
            applications: Self::build_applications(applications, dependencies),
            license_summary: Self::build_license_summary(dependencies),
            high_risk: Self::build_high_risk(dependencies, high_risk_threshold),
        }
    }

    fn build_metadata(metadata: &ReportMetadata, total_dependencies: usize) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
            organization_id: metadata.organization_id().to_string(),
            total_dependencies,
        }
    }

    fn build_applications(
        applications: &ApplicationCatalog,
        dependencies: &DependencyCatalog,
    ) -> Vec<ApplicationReportView> {
        applications
            .list_all()
            .map(|app| ApplicationReportView {
                key: app.key().to_string(),
                name: app.name().to_string(),
                app_id: app.app_id().to_string(),
                branch_id: app.branch_id().map(str::to_string),
                report_id: app.report_id().map(str::to_string),
                loaded: app.is_loaded(),
                rows: LicenseAggregator::application_rows(app, dependencies)
                    .into_iter()
                    .map(|row| DependencyRowView {
                        threat: row.threat,
                        threat_score: row.threat_score,
                        licenses: row.license_expression,
                        status: row.status,
                        component: row.coordinate_key,
                        detected_licenses: row.detected_licenses,
                    })
                    .collect(),
            })
            .collect()
    }

    fn build_license_summary(dependencies: &DependencyCatalog) -> LicenseSummaryView {
        let summary = LicenseAggregator::collect_all_licenses(dependencies);

        let categories = summary
            .categories
            .iter()
            .map(|(category, expressions)| {
                let expressions: Vec<ExpressionView> = expressions
                    .iter()
                    .map(|(expression, deps)| ExpressionView {
                        expression: expression.clone(),
                        count: summary.count_for(expression),
                        dependencies: deps.iter().map(|d| d.key()).collect(),
                    })
                    .collect();

                CategoryView {
                    category: category.label().to_string(),
                    total: expressions.iter().map(|e| e.dependencies.len()).sum(),
                    expressions,
                }
            })
            .collect();

        LicenseSummaryView { categories }
    }

    fn build_high_risk(dependencies: &DependencyCatalog, threshold: u32) -> HighRiskView {
        let entries = dependencies
            .list_high_risk(threshold)
            .into_iter()
            .filter_map(|(dep, info)| {
                info.threat().score().map(|threat| HighRiskEntryView {
                    component: dep.key(),
                    threat,
                    licenses: info.joined_expression(),
                    status: info.status().to_string(),
                    used_in: Self::used_in(dep),
                })
            })
            .collect();

        let unscored = dependencies
            .list_unscored()
            .into_iter()
            .map(|(dep, info)| UnscoredEntryView {
                component: dep.key(),
                threat: info.threat().to_string(),
                used_in: Self::used_in(dep),
            })
            .collect();

        HighRiskView {
            threshold,
            dependencies: entries,
            unscored,
        }
    }

    fn used_in(dependency: &Dependency) -> Vec<String> {
        dependency.app_names().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_compliance::domain::Application;
    use serde_json::json;

    fn fixture() -> (ReportMetadata, ApplicationCatalog, DependencyCatalog) {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "iq-license-report".to_string(),
            "0.4.0".to_string(),
            "urn:uuid:test".to_string(),
            "org-1".to_string(),
        );

        let mut deps = DependencyCatalog::new();
        let mut app = Application::new("web".to_string(), "a1".to_string(), None);
        for record in [
            json!({"artifactId": "a", "version": "1.0", "status": "Confirmed",
                   "effectiveLicenses": ["MIT", "Apache-2.0"], "effectiveLicenseThreat": 2}),
            json!({"groupId": "g", "artifactId": "b", "version": "2.0", "status": "Overridden",
                   "overriddenLicenses": ["GPL-3.0"], "overriddenLicenseThreat": 9}),
            json!({"artifactId": "c", "version": "3.0", "effectiveLicenseThreat": null}),
        ] {
            let key = deps.add_or_update(&record, Some("web"), true).unwrap();
            app.add_dependency_key(key);
        }
        app.mark_loaded();

        let mut apps = ApplicationCatalog::new("org-1");
        apps.add(app);
        (metadata, apps, deps)
    }

    #[test]
    fn test_build_metadata() {
        let (metadata, apps, deps) = fixture();
        let model = LicenseReportReadModelBuilder::build(&metadata, &apps, &deps, 8);
        assert_eq!(model.metadata.run_id, "urn:uuid:test");
        assert_eq!(model.metadata.organization_id, "org-1");
        assert_eq!(model.metadata.total_dependencies, 3);
    }

    #[test]
    fn test_build_applications() {
        let (metadata, apps, deps) = fixture();
        let model = LicenseReportReadModelBuilder::build(&metadata, &apps, &deps, 8);
        assert_eq!(model.applications.len(), 1);
        assert!(model.applications[0].loaded);
        let rows = &model.applications[0].rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].component, "a : 1.0");
        assert_eq!(rows[0].licenses, "Apache-2.0 AND MIT");
        assert_eq!(rows[1].threat, "Unsupported");
        assert_eq!(rows[1].component, "c : 3.0");
        assert_eq!(rows[1].status, "");
    }

    #[test]
    fn test_build_applications_keeps_skipped_state() {
        let (metadata, mut apps, deps) = fixture();
        let mut skipped = Application::new("draft".to_string(), "d1".to_string(), None);
        skipped.set_report_id("r-9".to_string());
        apps.add(skipped);

        let model = LicenseReportReadModelBuilder::build(&metadata, &apps, &deps, 8);
        let draft = model.applications.iter().find(|a| a.key == "draft").unwrap();
        assert!(!draft.loaded);
        assert_eq!(draft.report_id.as_deref(), Some("r-9"));
        assert!(draft.rows.is_empty());
    }

    #[test]
    fn test_build_license_summary_in_category_order() {
        let (metadata, apps, deps) = fixture();
        let model = LicenseReportReadModelBuilder::build(&metadata, &apps, &deps, 8);
        let names: Vec<&str> = model
            .license_summary
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, vec!["Attribution", "Copyleft", "Not found"]);

        let copyleft = &model.license_summary.categories[1];
        assert_eq!(copyleft.total, 1);
        assert_eq!(copyleft.expressions[0].expression, "GPL-3.0");
        assert_eq!(copyleft.expressions[0].count, 1);
        assert_eq!(copyleft.expressions[0].dependencies, vec!["g : b : 2.0"]);
    }

    #[test]
    fn test_build_high_risk() {
        let (metadata, apps, deps) = fixture();
        let model = LicenseReportReadModelBuilder::build(&metadata, &apps, &deps, 8);

        assert_eq!(model.high_risk.threshold, 8);
        assert_eq!(model.high_risk.dependencies.len(), 1);
        let entry = &model.high_risk.dependencies[0];
        assert_eq!(entry.component, "g : b : 2.0");
        assert_eq!(entry.threat, 9);
        assert_eq!(entry.licenses, "GPL-3.0");
        assert_eq!(entry.status, "Overridden");
        assert_eq!(entry.used_in, vec!["web"]);

        assert_eq!(model.high_risk.unscored.len(), 1);
        assert_eq!(model.high_risk.unscored[0].component, "c : 3.0");
        assert_eq!(model.high_risk.unscored[0].threat, "Unsupported");
    }
}
