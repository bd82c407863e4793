use crate::application::read_models::{
    ApplicationReportView, CategoryView, HighRiskView, LicenseReportReadModel, ReportMetadataView,
};
use crate::ports::outbound::{ReportArtifact, ReportFormatter};
use crate::shared::Result;

pub const MARKDOWN_REPORT_FILE: &str = "report.md";

/// Markdown table header for the category overview
const SUMMARY_TABLE_HEADER: &str = "| Category | Dependencies |\n";
const SUMMARY_TABLE_SEPARATOR: &str = "|----------|--------------|\n";

/// Markdown table header for one category
const CATEGORY_TABLE_HEADER: &str = "| License | Count | Dependencies |\n";
const CATEGORY_TABLE_SEPARATOR: &str = "|---------|-------|--------------|\n";

/// Markdown table header for high-risk dependencies
const HIGH_RISK_TABLE_HEADER: &str = "| Component | Threat | License | Status | Used in |\n";
const HIGH_RISK_TABLE_SEPARATOR: &str = "|-----------|--------|---------|--------|---------|\n";

/// Markdown table header for application rows
const APP_TABLE_HEADER: &str = "| Component | Threat | Licenses | Detected licenses | Status |\n";
const APP_TABLE_SEPARATOR: &str = "|-----------|--------|----------|-------------------|--------|\n";

/// MarkdownFormatter adapter rendering the license summary as `report.md`
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn join_cell(values: &[String]) -> String {
        Self::escape_markdown_table_cell(&values.join(", "))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str("# License Compliance Report\n\n");
        output.push_str(&format!("- Organization: `{}`\n", metadata.organization_id));
        output.push_str(&format!("- Generated: {}\n", metadata.timestamp));
        output.push_str(&format!(
            "- Tool: {} {}\n",
            metadata.tool_name, metadata.tool_version
        ));
        output.push_str(&format!("- Run: `{}`\n", metadata.run_id));
        output.push_str(&format!(
            "- Dependencies: {}\n\n",
            metadata.total_dependencies
        ));
    }

    fn render_summary(&self, output: &mut String, categories: &[CategoryView]) {
        output.push_str("## License Categories\n\n");
        if categories.is_empty() {
            output.push_str("*No dependencies loaded*\n\n");
            return;
        }

        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        for category in categories {
            output.push_str(&format!("| {} | {} |\n", category.category, category.total));
        }
        output.push('\n');

        for category in categories {
            output.push_str(&format!("### {}\n\n", category.category));
            output.push_str(CATEGORY_TABLE_HEADER);
            output.push_str(CATEGORY_TABLE_SEPARATOR);
            for expression in &category.expressions {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&expression.expression),
                    expression.count,
                    Self::join_cell(&expression.dependencies)
                ));
            }
            output.push('\n');
        }
    }

    fn render_high_risk(&self, output: &mut String, high_risk: &HighRiskView) {
        output.push_str(&format!(
            "## High-Risk Dependencies (threat >= {})\n\n",
            high_risk.threshold
        ));

        if high_risk.dependencies.is_empty() {
            output.push_str("*No high-risk dependencies*\n\n");
        } else {
            output.push_str(HIGH_RISK_TABLE_HEADER);
            output.push_str(HIGH_RISK_TABLE_SEPARATOR);
            for entry in &high_risk.dependencies {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&entry.component),
                    entry.threat,
                    Self::escape_markdown_table_cell(&entry.licenses),
                    Self::escape_markdown_table_cell(&entry.status),
                    Self::join_cell(&entry.used_in)
                ));
            }
            output.push('\n');
        }

        if !high_risk.unscored.is_empty() {
            output.push_str("### Dependencies Without a Threat Score\n\n");
            for entry in &high_risk.unscored {
                output.push_str(&format!(
                    "- `{}` ({}), used in {}\n",
                    entry.component,
                    entry.threat,
                    entry.used_in.join(", ")
                ));
            }
            output.push('\n');
        }
    }

    fn render_applications(&self, output: &mut String, applications: &[ApplicationReportView]) {
        output.push_str("## Applications\n\n");
        if applications.is_empty() {
            output.push_str("*No applications loaded*\n\n");
            return;
        }

        for app in applications {
            output.push_str(&format!("### {}\n\n", app.key));
            match &app.report_id {
                Some(report_id) => output.push_str(&format!("Report: `{}`\n\n", report_id)),
                None => {
                    output.push_str("*No report available*\n\n");
                    continue;
                }
            }
            if !app.loaded {
                output.push_str("*License data unavailable*\n\n");
                continue;
            }
            if app.rows.is_empty() {
                output.push_str("*No dependencies*\n\n");
                continue;
            }

            output.push_str(APP_TABLE_HEADER);
            output.push_str(APP_TABLE_SEPARATOR);
            for row in &app.rows {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&row.component),
                    Self::escape_markdown_table_cell(&row.threat),
                    Self::escape_markdown_table_cell(&row.licenses),
                    Self::escape_markdown_table_cell(row.detected_licenses.as_deref().unwrap_or("")),
                    Self::escape_markdown_table_cell(&row.status)
                ));
            }
            output.push('\n');
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &LicenseReportReadModel) -> Result<Vec<ReportArtifact>> {
        let mut output = String::new();
        self.render_header(&mut output, &model.metadata);
        self.render_summary(&mut output, &model.license_summary.categories);
        self.render_high_risk(&mut output, &model.high_risk);
        self.render_applications(&mut output, &model.applications);
        Ok(vec![ReportArtifact::new(MARKDOWN_REPORT_FILE, output)])
    }
}
