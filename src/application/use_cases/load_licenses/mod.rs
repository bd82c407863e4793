use crate::license_compliance::catalog::{ApplicationCatalog, DependencyCatalog};
use crate::license_compliance::domain::Application;
use crate::ports::outbound::{LicenseReportSource, ProgressReporter};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Counts gathered while loading one batch of applications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub applications_loaded: usize,
    pub applications_skipped: usize,
    pub records_loaded: usize,
    pub malformed_records: usize,
}

/// LoadLicensesUseCase - fills the catalogs from a license report source
///
/// Discovers the organization's applications, resolves each application's
/// report id, and feeds every raw dependency record through the dependency
/// catalog. One bad record or one unreachable application never aborts the
/// batch.
///
/// # Type Parameters
/// * `S` - LicenseReportSource implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadLicensesUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> LoadLicensesUseCase<S, PR>
where
    S: LicenseReportSource,
    PR: ProgressReporter,
{
    /// Creates a new LoadLicensesUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Discovers applications and loads all of their dependency records
    pub fn execute(
        &self,
        applications: &mut ApplicationCatalog,
        dependencies: &mut DependencyCatalog,
    ) -> Result<LoadSummary> {
        self.discover_applications(applications)?;
        self.load_all(applications, dependencies)
    }

    /// Lists the catalog's organization's applications and adds them.
    ///
    /// # Returns
    /// Number of applications discovered
    pub fn discover_applications(&self, applications: &mut ApplicationCatalog) -> Result<usize> {
        let organization_id = applications.organization_id().to_string();
        self.progress_reporter.report(&format!(
            "🔍 Discovering applications for organization {}...",
            organization_id
        ));

        let listings = self.source.list_applications(&organization_id)?;
        let count = listings.len();

        for listing in listings {
            let mut application = Application::new(listing.name, listing.app_id, listing.branch_id);
            if let Some(report_id) = listing.report_id {
                application.set_report_id(report_id);
            }
            applications.add(application);
        }

        self.progress_reporter
            .report(&format!("✅ Found {} application(s)", count));
        Ok(count)
    }

    /// Loads dependency records for every application, in key order.
    ///
    /// Records are added with update permission so a dependency shared by
    /// several applications ends up attributed to all of them.
    ///
    /// # Errors
    /// Only catalog errors other than malformed records abort the batch.
    pub fn load_all(
        &self,
        applications: &mut ApplicationCatalog,
        dependencies: &mut DependencyCatalog,
    ) -> Result<LoadSummary> {
        let keys = applications.keys();
        let total = keys.len();
        let mut summary = LoadSummary::default();

        if total > 0 {
            self.progress_reporter.report("📥 Loading license data...");
        }

        for (index, key) in keys.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(key));

            let Some(application) = applications.get_mut(key) else {
                continue;
            };

            if self.load_application(application, dependencies, &mut summary)? {
                summary.applications_loaded += 1;
            } else {
                summary.applications_skipped += 1;
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} dependency record(s) from {} application(s) ({} skipped, {} malformed record(s))",
            summary.records_loaded,
            summary.applications_loaded,
            summary.applications_skipped,
            summary.malformed_records
        ));

        Ok(summary)
    }

    /// Loads one application. Returns `false` when it had to be skipped.
    fn load_application(
        &self,
        application: &mut Application,
        dependencies: &mut DependencyCatalog,
        summary: &mut LoadSummary,
    ) -> Result<bool> {
        let key = application.key().to_string();

        if application.report_id().is_none() {
            match self.source.fetch_report_id(application) {
                Ok(Some(report_id)) => application.set_report_id(report_id),
                Ok(None) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: No report found for application {}, skipping",
                        key
                    ));
                    return Ok(false);
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Could not look up report for {}: {}",
                        key, e
                    ));
                    return Ok(false);
                }
            }
        }

        let records = match self.source.fetch_dependency_records(application) {
            Ok(records) => records,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not read license data for {}: {}",
                    key, e
                ));
                return Ok(false);
            }
        };

        for record in &records {
            match dependencies.add_or_update(record, Some(&key), true) {
                Ok(dependency_key) => {
                    application.add_dependency_key(dependency_key);
                    summary.records_loaded += 1;
                }
                Err(ReportError::MalformedRecord { reason }) => {
                    summary.malformed_records += 1;
                    tracing::warn!(application = %key, %reason, "skipping malformed dependency record");
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping malformed record in {}: {}",
                        key, reason
                    ));
                }
                Err(e) => return Err(e.into()),
            }
        }

        application.mark_loaded();
        tracing::debug!(application = %key, records = records.len(), "application loaded");
        Ok(true)
    }
}
