use crate::adapters::outbound::formatters::{
    CsvFormatter, JsonFormatter, MarkdownFormatter, RedReportFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Formatter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// Per-application CSV files
    Csv,
    /// High-risk dependency text report
    RedReport,
    /// Category summary as Markdown
    Markdown,
    /// Category summary as JSON
    Json,
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use iq_license_report::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Csv);
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Csv => Box::new(CsvFormatter::new()),
            FormatterType::RedReport => Box::new(RedReportFormatter::new()),
            FormatterType::Markdown => Box::new(MarkdownFormatter::new()),
            FormatterType::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Formatters run for one report: CSV and red report always, then the
    /// summary in the requested format
    pub fn for_format(format: OutputFormat) -> Vec<FormatterType> {
        let summary = match format {
            OutputFormat::Markdown => FormatterType::Markdown,
            OutputFormat::Json => FormatterType::Json,
        };
        vec![FormatterType::Csv, FormatterType::RedReport, summary]
    }

    /// Returns the progress message for the specified formatter type
    ///
    /// # Examples
    /// ```
    /// use iq_license_report::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let message = FormatterFactory::progress_message(FormatterType::Csv);
    /// assert_eq!(message, "📝 Writing per-application CSV reports...");
    /// ```
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Csv => "📝 Writing per-application CSV reports...",
            FormatterType::RedReport => "📝 Writing high-risk dependency report...",
            FormatterType::Markdown => "📝 Writing Markdown license summary...",
            FormatterType::Json => "📝 Writing JSON license summary...",
        }
    }
}
