use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::read_models::LicenseReportReadModelBuilder;
use crate::license_compliance::catalog::{ApplicationCatalog, DependencyCatalog};
use crate::license_compliance::services::ReportMetadataGenerator;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// GenerateReportUseCase - turns loaded catalogs into the report read model
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> GenerateReportUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Report options (high-risk threshold)
    /// * `applications` - Loaded applications
    /// * `dependencies` - Loaded dependencies
    ///
    /// # Returns
    /// ReportResponse with the read model and whether anything is high-risk
    pub fn execute(
        &self,
        request: &ReportRequest,
        applications: &ApplicationCatalog,
        dependencies: &DependencyCatalog,
    ) -> Result<ReportResponse> {
        self.progress_reporter.report(&format!(
            "📊 Categorizing {} dependenc{}...",
            dependencies.len(),
            if dependencies.len() == 1 { "y" } else { "ies" }
        ));

        let metadata = ReportMetadataGenerator::generate_default_metadata(applications.organization_id());
        let read_model = LicenseReportReadModelBuilder::build(
            &metadata,
            applications,
            dependencies,
            request.high_risk_threshold,
        );
        let response = ReportResponse::new(read_model);

        let high_risk = &response.read_model.high_risk;
        if response.has_high_risk {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} high-risk dependenc{} (threat >= {})",
                high_risk.dependencies.len(),
                if high_risk.dependencies.len() == 1 { "y" } else { "ies" },
                high_risk.threshold
            ));
        }
        if !high_risk.unscored.is_empty() {
            self.progress_reporter.report(&format!(
                "ℹ️  {} dependenc{} without a threat score",
                high_risk.unscored.len(),
                if high_risk.unscored.len() == 1 { "y" } else { "ies" }
            ));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_compliance::domain::Application;
    use serde_json::json;

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn catalogs(threat: u32) -> (ApplicationCatalog, DependencyCatalog) {
        let mut deps = DependencyCatalog::new();
        let key = deps
            .add_or_update(
                &json!({"artifactId": "a", "version": "1", "status": "Open",
                        "effectiveLicenses": ["GPL-3.0"], "effectiveLicenseThreat": threat}),
                Some("web"),
                true,
            )
            .unwrap();
        let mut app = Application::new("web".to_string(), "a1".to_string(), None);
        app.add_dependency_key(key);
        let mut apps = ApplicationCatalog::new("org-1");
        apps.add(app);
        (apps, deps)
    }

    #[test]
    fn test_execute_flags_high_risk() {
        let (apps, deps) = catalogs(9);
        let use_case = GenerateReportUseCase::new(SilentReporter);
        let response = use_case
            .execute(&ReportRequest::default(), &apps, &deps)
            .unwrap();

        assert!(response.has_high_risk);
        assert_eq!(response.read_model.metadata.organization_id, "org-1");
        assert_eq!(response.read_model.applications[0].rows.len(), 1);
    }

    #[test]
    fn test_execute_respects_threshold() {
        let (apps, deps) = catalogs(5);
        let use_case = GenerateReportUseCase::new(SilentReporter);

        let response = use_case
            .execute(&ReportRequest::default(), &apps, &deps)
            .unwrap();
        assert!(!response.has_high_risk);

        let response = use_case.execute(&ReportRequest::new(5), &apps, &deps).unwrap();
        assert!(response.has_high_risk);
    }
}
