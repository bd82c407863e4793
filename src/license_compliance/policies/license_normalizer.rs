/// Placeholder strings the policy service emits when no license was found.
/// They are dropped from combined expressions unless nothing else is left.
pub const PLACEHOLDER_LICENSES: [&str; 4] =
    ["No Source License", "Not Declared", "No Sources", "Not Provided"];

/// LicenseNormalizer policy for combining the declared, observed and
/// effective license views of a component into one SPDX-style expression.
pub struct LicenseNormalizer;

impl LicenseNormalizer {
    /// Combines three license views into a single expression.
    ///
    /// Strings are de-duplicated in encountered order (declared, observed,
    /// effective). A lowercase `" or "` becomes `" OR "`, and such strings are
    /// parenthesised when more than one distinct string exists. A single
    /// distinct string is returned as-is. Otherwise placeholders are removed
    /// (unless all strings are placeholders) and the rest is joined with
    /// `" AND "`.
    ///
    /// # Examples
    /// ```
    /// use iq_license_report::license_compliance::policies::LicenseNormalizer;
    ///
    /// let combined = LicenseNormalizer::combine_license_views(
    ///     &["MIT".to_string()],
    ///     &["MIT or Apache-2.0".to_string()],
    ///     &["MIT".to_string()],
    /// );
    /// assert_eq!(combined, "MIT AND (MIT OR Apache-2.0)");
    /// ```
    pub fn combine_license_views(
        declared: &[String],
        observed: &[String],
        effective: &[String],
    ) -> String {
        let mut distinct: Vec<&str> = Vec::new();
        for license in declared.iter().chain(observed).chain(effective) {
            if !distinct.contains(&license.as_str()) {
                distinct.push(license);
            }
        }

        let multiple = distinct.len() > 1;
        let normalized: Vec<String> = distinct
            .into_iter()
            .map(|license| Self::normalize_one(license, multiple))
            .collect();

        if normalized.len() == 1 {
            return normalized.into_iter().next().unwrap_or_default();
        }

        let meaningful: Vec<&str> = normalized
            .iter()
            .map(String::as_str)
            .filter(|license| !PLACEHOLDER_LICENSES.contains(license))
            .collect();

        if meaningful.is_empty() {
            normalized.join(" AND ")
        } else {
            meaningful.join(" AND ")
        }
    }

    /// Canonicalises one license string
    fn normalize_one(license: &str, multiple: bool) -> String {
        let rewritten = license.replace(" or ", " OR ");
        if rewritten != license && multiple {
            format!("({})", rewritten)
        } else {
            rewritten
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_combines_and_parenthesises() {
        let result = LicenseNormalizer::combine_license_views(
            &strings(&["MIT"]),
            &strings(&["MIT or Apache-2.0"]),
            &strings(&["MIT"]),
        );
        assert_eq!(result, "MIT AND (MIT OR Apache-2.0)");
    }

    #[test]
    fn test_single_string_not_parenthesised() {
        let result = LicenseNormalizer::combine_license_views(
            &strings(&["MIT or Apache-2.0"]),
            &strings(&["MIT or Apache-2.0"]),
            &[],
        );
        assert_eq!(result, "MIT OR Apache-2.0");
    }

    #[test]
    fn test_single_placeholder_returned() {
        let result =
            LicenseNormalizer::combine_license_views(&strings(&["Not Declared"]), &[], &[]);
        assert_eq!(result, "Not Declared");
    }

    #[test]
    fn test_placeholders_dropped_when_real_license_present() {
        let result = LicenseNormalizer::combine_license_views(
            &strings(&["Not Declared"]),
            &strings(&["No Sources", "BSD-3-Clause"]),
            &strings(&["Apache-2.0"]),
        );
        assert_eq!(result, "BSD-3-Clause AND Apache-2.0");
    }

    #[test]
    fn test_all_placeholders_kept() {
        let result = LicenseNormalizer::combine_license_views(
            &strings(&["Not Declared"]),
            &strings(&["No Sources"]),
            &[],
        );
        assert_eq!(result, "Not Declared AND No Sources");
    }

    #[test]
    fn test_empty_views() {
        assert_eq!(LicenseNormalizer::combine_license_views(&[], &[], &[]), "");
    }

    #[test]
    fn test_order_follows_declared_observed_effective() {
        let result = LicenseNormalizer::combine_license_views(
            &strings(&["B"]),
            &strings(&["A"]),
            &strings(&["C", "A"]),
        );
        assert_eq!(result, "B AND A AND C");
    }
}
