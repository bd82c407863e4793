use super::nexus_json::{ApplicationsExport, LicensesExport, ReportDescriptor};
use crate::license_compliance::domain::Application;
use crate::ports::outbound::{ApplicationListing, LicenseReportSource};
use crate::shared::error::ReportError;
use crate::shared::security::{read_regular_file, safe_file_name};
use crate::shared::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

const APPLICATIONS_FILE: &str = "applications.json";
const REPORTS_DIR: &str = "reports";
const LICENSES_SUFFIX: &str = ".orig.json";

/// FileSystemReportSource adapter reading saved policy-service exports
///
/// Layout under the JSON directory:
/// - `applications.json`: the application listing
/// - `reports/<appId>.json`: report descriptors of one application
/// - `<appKey>.orig.json`: the `licenses.json` payload of one application, with path
///   separators in the key replaced by `_`
pub struct FileSystemReportSource {
    json_dir: PathBuf,
}

impl FileSystemReportSource {
    pub fn new(json_dir: PathBuf) -> Self {
        Self { json_dir }
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path, description: &str) -> Result<T> {
        let content = read_regular_file(path, description)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} ({})", description, path.display()))
    }

    /// Rejects identifiers that would escape the JSON directory
    fn safe_file_stem(value: &str) -> Result<&str> {
        if value.is_empty()
            || value.contains('/')
            || value.contains('\\')
            || value == "."
            || value == ".."
        {
            return Err(ReportError::SecurityError {
                path: PathBuf::from(value),
                reason: "Identifier cannot be used as a file name".to_string(),
                hint: "Application ids must not contain path separators".to_string(),
            }
            .into());
        }
        Ok(value)
    }
}

impl LicenseReportSource for FileSystemReportSource {
    fn list_applications(&self, organization_id: &str) -> Result<Vec<ApplicationListing>> {
        let path = self.json_dir.join(APPLICATIONS_FILE);
        let export: ApplicationsExport = self.read_json(&path, APPLICATIONS_FILE)?;

        let entries = export.applications.ok_or_else(|| ReportError::FileReadError {
            path: path.clone(),
            details: "missing \"applications\" key".to_string(),
        })?;

        let listings = entries
            .into_iter()
            .filter(|entry| entry.organization_id.as_deref() == Some(organization_id))
            .filter_map(|entry| match (entry.name, entry.id) {
                (Some(name), Some(app_id)) => Some(ApplicationListing {
                    name,
                    app_id,
                    branch_id: entry.branch_id,
                    report_id: entry.report_id,
                }),
                (name, _) => {
                    tracing::warn!(?name, "skipping application entry without name or id");
                    None
                }
            })
            .collect();

        Ok(listings)
    }

    fn fetch_report_id(&self, application: &Application) -> Result<Option<String>> {
        let stem = Self::safe_file_stem(application.app_id())?;
        let path = self.json_dir.join(REPORTS_DIR).join(format!("{}.json", stem));

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no saved report descriptors");
            return Ok(None);
        }

        let descriptors: Vec<ReportDescriptor> = self.read_json(&path, "report list")?;
        match descriptors.first() {
            None => Ok(None),
            Some(first) => first.report_id().map(Some).ok_or_else(|| {
                ReportError::FileReadError {
                    path,
                    details: "first report has no reportHtmlUrl".to_string(),
                }
                .into()
            }),
        }
    }

    fn fetch_dependency_records(&self, application: &Application) -> Result<Vec<Value>> {
        let stem = safe_file_name(application.key());
        let path = self.json_dir.join(format!("{}{}", stem, LICENSES_SUFFIX));
        let export: LicensesExport = self.read_json(&path, "license data")?;

        match export.aa_data {
            Some(records) => Ok(records),
            None => {
                tracing::warn!(path = %path.display(), "license data has no aaData key");
                Ok(Vec::new())
            }
        }
    }
}
