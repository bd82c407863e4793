pub mod application;
pub mod coordinates;
pub mod dependency;
pub mod license_category;
pub mod license_info;
pub mod raw_record;
pub mod report_metadata;
pub mod threat;

pub use application::Application;
pub use coordinates::Coordinates;
pub use dependency::Dependency;
pub use license_category::LicenseCategory;
pub use license_info::{LicenseInfo, LICENSE_JOINER};
pub use raw_record::RawDependencyRecord;
pub use report_metadata::ReportMetadata;
pub use threat::Threat;
