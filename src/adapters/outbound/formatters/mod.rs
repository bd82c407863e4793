/// Formatter adapters for the report outputs
mod csv_formatter;
mod json_formatter;
mod markdown_formatter;
mod red_report_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::{JsonFormatter, JSON_REPORT_FILE};
pub use markdown_formatter::{MarkdownFormatter, MARKDOWN_REPORT_FILE};
pub use red_report_formatter::{RedReportFormatter, RED_REPORT_FILE};
