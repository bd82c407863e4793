use super::Threat;

/// Separator used when joining license identifiers into one expression
pub const LICENSE_JOINER: &str = " AND ";

/// LicenseInfo value object: the authoritative license view of a dependency
/// together with its threat and review status.
///
/// Licenses are always stored sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseInfo {
    licenses: Vec<String>,
    threat: Threat,
    status: String,
}

impl LicenseInfo {
    pub fn new(mut licenses: Vec<String>, threat: Threat, status: String) -> Self {
        licenses.sort();
        Self {
            licenses,
            threat,
            status,
        }
    }

    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn threat(&self) -> Threat {
        self.threat
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Sorted licenses joined with `" AND "`; empty when there are none
    pub fn joined_expression(&self) -> String {
        self.licenses.join(LICENSE_JOINER)
    }
}
