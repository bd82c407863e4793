/// Known-incorrect or superseded combined expressions and their corrections.
/// Matching is exact and applied before categorization.
const CONVERSIONS: &[(&str, &str)] = &[
    ("EDL-1.0 AND EPL-1.0", "EPL-1.0 AND BSD-3-Clause"),
    ("BSD-3-Clause AND EDL-1.0", "BSD-3-Clause"),
    ("BSD-3-Clause AND EDL-1.0 AND MIT", "BSD-3-Clause AND MIT"),
    ("BSD AND Generic-Liberal-Clause", "BSD-3-Clause"),
    (
        "Apache-2.0 AND BSD-3-Clause AND Generic-Open-Source-Clause",
        "Apache-2.0 AND BSD-3-Clause",
    ),
];

/// LicenseConversion policy correcting combined license expressions
pub struct LicenseConversion;

impl LicenseConversion {
    /// Returns the corrected expression, or the input unchanged
    pub fn convert(expression: &str) -> &str {
        CONVERSIONS
            .iter()
            .find(|(from, _)| *from == expression)
            .map(|(_, to)| *to)
            .unwrap_or(expression)
    }
}
