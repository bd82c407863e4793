pub mod category_rules;
pub mod license_conversion;
pub mod license_normalizer;
pub mod license_priority;

pub use category_rules::{CategoryRule, CATEGORY_RULES};
pub use license_conversion::LicenseConversion;
pub use license_normalizer::{LicenseNormalizer, PLACEHOLDER_LICENSES};
pub use license_priority::{LicensePriority, LicenseView, OVERRIDE_STATUSES};
