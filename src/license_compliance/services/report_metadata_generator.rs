use crate::license_compliance::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportMetadataGenerator service stamping each reporting run
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh run id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the report
    /// * `tool_version` - Version of the tool
    /// * `organization_id` - Organization the report covers
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        organization_id: &str,
    ) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
            organization_id.to_string(),
        )
    }

    /// Generates metadata using this crate's name and version
    pub fn generate_default_metadata(organization_id: &str) -> ReportMetadata {
        Self::generate_metadata(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            organization_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0", "org-1");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert_eq!(metadata.organization_id(), "org-1");
        assert!(metadata.run_id().starts_with("urn:uuid:"));
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportMetadataGenerator::generate_default_metadata("org-1");

        assert_eq!(metadata.tool_name(), "iq-license-report");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let metadata = ReportMetadataGenerator::generate_metadata("t", "1", "o");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_unique_run_ids() {
        let first = ReportMetadataGenerator::generate_metadata("t", "1", "o");
        let second = ReportMetadataGenerator::generate_metadata("t", "1", "o");
        assert_ne!(first.run_id(), second.run_id());
    }
}
