pub mod license_aggregator;
pub mod license_categorizer;
pub mod report_metadata_generator;

pub use license_aggregator::{
    ApplicationRow, CategoryMap, LicenseAggregator, LicenseSummary, NOT_AVAILABLE,
    NOT_FOUND_EXPRESSION,
};
pub use license_categorizer::LicenseCategorizer;
pub use report_metadata_generator::ReportMetadataGenerator;
