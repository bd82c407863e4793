use crate::license_compliance::domain::LicenseCategory;
use crate::license_compliance::policies::CATEGORY_RULES;
use std::collections::HashSet;
use std::sync::OnceLock;

type CompiledRules = Vec<(LicenseCategory, HashSet<&'static str>)>;

fn compiled_rules() -> &'static CompiledRules {
    static RULES: OnceLock<CompiledRules> = OnceLock::new();
    RULES.get_or_init(|| {
        CATEGORY_RULES
            .iter()
            .map(|rule| (rule.category, rule.expressions.iter().copied().collect()))
            .collect()
    })
}

/// LicenseCategorizer service mapping a combined license expression to its
/// report category.
///
/// Matching is on the whole expression string, so `"MIT"` and
/// `"Apache-2.0 AND MIT"` are looked up independently.
pub struct LicenseCategorizer;

impl LicenseCategorizer {
    /// Returns the first category whose rule lists `expression` exactly,
    /// or `LicenseCategory::Other`.
    pub fn categorize(expression: &str) -> LicenseCategory {
        compiled_rules()
            .iter()
            .find(|(_, expressions)| expressions.contains(expression))
            .map(|(category, _)| *category)
            .unwrap_or(LicenseCategory::Other)
    }
}
