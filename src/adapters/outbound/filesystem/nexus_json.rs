//! Shapes of the saved policy-service JSON exports.
//!
//! Only the fields the report source needs are modelled; everything else in
//! the exports is ignored.

use serde::Deserialize;
use serde_json::Value;

/// `applications.json`
#[derive(Debug, Deserialize)]
pub struct ApplicationsExport {
    pub applications: Option<Vec<ApplicationEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub organization_id: Option<String>,
    /// Present when the listing came from a CI job rather than the service
    pub branch_id: Option<String>,
    pub report_id: Option<String>,
}

/// One element of `reports/<appId>.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDescriptor {
    pub report_html_url: Option<String>,
}

impl ReportDescriptor {
    /// Last non-empty path segment of the report URL
    pub fn report_id(&self) -> Option<String> {
        self.report_html_url
            .as_deref()?
            .split('/')
            .rev()
            .find(|segment| !segment.is_empty())
            .map(str::to_string)
    }
}

/// `<appKey>.orig.json`, the saved `licenses.json` payload
#[derive(Debug, Deserialize)]
pub struct LicensesExport {
    #[serde(rename = "aaData")]
    pub aa_data: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_id_from_url() {
        let descriptor = ReportDescriptor {
            report_html_url: Some("ui/links/application/web/report/3f2a9c".to_string()),
        };
        assert_eq!(descriptor.report_id().as_deref(), Some("3f2a9c"));
    }

    #[test]
    fn test_report_id_ignores_trailing_slash() {
        let descriptor = ReportDescriptor {
            report_html_url: Some("ui/links/application/web/report/3f2a9c/".to_string()),
        };
        assert_eq!(descriptor.report_id().as_deref(), Some("3f2a9c"));
    }

    #[test]
    fn test_report_id_missing_url() {
        let descriptor = ReportDescriptor {
            report_html_url: None,
        };
        assert!(descriptor.report_id().is_none());
    }

    #[test]
    fn test_deserialize_application_entry() {
        let entry: ApplicationEntry = serde_json::from_str(
            r#"{"id": "a1b2", "publicId": "web", "name": "web-portal", "organizationId": "org-1"}"#,
        )
        .unwrap();
        assert_eq!(entry.id.as_deref(), Some("a1b2"));
        assert_eq!(entry.organization_id.as_deref(), Some("org-1"));
        assert!(entry.branch_id.is_none());
    }
}
