/// ReportMetadata value object describing one reporting run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
    organization_id: String,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
        organization_id: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
            organization_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "iq-license-report".to_string(),
            "0.4.0".to_string(),
            "urn:uuid:12345".to_string(),
            "org-1".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "iq-license-report");
        assert_eq!(metadata.tool_version(), "0.4.0");
        assert_eq!(metadata.run_id(), "urn:uuid:12345");
        assert_eq!(metadata.organization_id(), "org-1");
    }
}
