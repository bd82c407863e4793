use iq_license_report::ports::outbound::ApplicationListing;
use iq_license_report::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

/// Mock LicenseReportSource serving canned listings and records
#[derive(Default)]
pub struct MockReportSource {
    pub listings: Vec<ApplicationListing>,
    pub report_ids: HashMap<String, String>,
    pub records: HashMap<String, Vec<Value>>,
    pub should_fail_listing: bool,
}

impl MockReportSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail_listing: true,
            ..Self::default()
        }
    }

    /// Adds an application with a report and the given records
    pub fn with_application(mut self, name: &str, records: Vec<Value>) -> Self {
        self.listings.push(Self::listing(name));
        self.report_ids
            .insert(name.to_string(), format!("report-{}", name));
        self.records.insert(name.to_string(), records);
        self
    }

    /// Adds an application that has never been scanned
    pub fn with_unscanned_application(mut self, name: &str) -> Self {
        self.listings.push(Self::listing(name));
        self
    }

    fn listing(name: &str) -> ApplicationListing {
        ApplicationListing {
            name: name.to_string(),
            app_id: format!("id-{}", name),
            branch_id: None,
            report_id: None,
        }
    }
}

impl LicenseReportSource for MockReportSource {
    fn list_applications(&self, _organization_id: &str) -> Result<Vec<ApplicationListing>> {
        if self.should_fail_listing {
            anyhow::bail!("Mock application listing failure");
        }
        Ok(self.listings.clone())
    }

    fn fetch_report_id(&self, application: &Application) -> Result<Option<String>> {
        Ok(self.report_ids.get(application.name()).cloned())
    }

    fn fetch_dependency_records(&self, application: &Application) -> Result<Vec<Value>> {
        Ok(self
            .records
            .get(application.name())
            .cloned()
            .unwrap_or_default())
    }
}
