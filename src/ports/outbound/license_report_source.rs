use crate::license_compliance::domain::Application;
use crate::shared::Result;
use serde_json::Value;

/// One application as listed by the policy service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationListing {
    pub name: String,
    pub app_id: String,
    pub branch_id: Option<String>,
    /// Known up front when the listing already carries it
    pub report_id: Option<String>,
}

/// LicenseReportSource port for reading policy-service license data
///
/// This port abstracts where application listings, report ids and raw
/// dependency records come from (saved JSON exports, a live service, etc.).
/// Calls are made sequentially, one application at a time.
pub trait LicenseReportSource {
    /// Lists the applications belonging to an organization
    ///
    /// # Errors
    /// Returns an error if the listing cannot be read or parsed
    fn list_applications(&self, organization_id: &str) -> Result<Vec<ApplicationListing>>;

    /// Looks up the latest report id of an application
    ///
    /// # Returns
    /// `None` when the application has no report yet
    fn fetch_report_id(&self, application: &Application) -> Result<Option<String>>;

    /// Fetches the raw dependency records of an application's report
    ///
    /// Records are returned unparsed; malformed entries are the caller's
    /// concern.
    fn fetch_dependency_records(&self, application: &Application) -> Result<Vec<Value>>;
}
