use std::fmt;

/// Report category a combined license expression falls into.
///
/// Variants are declared in report order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LicenseCategory {
    Apache2,
    AdvertisingClause,
    Attribution,
    Cc0OrPublicDomain,
    Copyleft,
    Json,
    ProprietaryNotices,
    StandardsBodies,
    UseRestrictions,
    WeakCopyleft,
    Other,
    /// Dependency with no resolvable license. Only produced by aggregation.
    NotFound,
}

impl LicenseCategory {
    /// All categories in report order
    pub const ALL: [LicenseCategory; 12] = [
        LicenseCategory::Apache2,
        LicenseCategory::AdvertisingClause,
        LicenseCategory::Attribution,
        LicenseCategory::Cc0OrPublicDomain,
        LicenseCategory::Copyleft,
        LicenseCategory::Json,
        LicenseCategory::ProprietaryNotices,
        LicenseCategory::StandardsBodies,
        LicenseCategory::UseRestrictions,
        LicenseCategory::WeakCopyleft,
        LicenseCategory::Other,
        LicenseCategory::NotFound,
    ];

    /// Human readable label used as the category heading in reports
    pub fn label(&self) -> &'static str {
        match self {
            LicenseCategory::Apache2 => "Apache-2.0",
            LicenseCategory::AdvertisingClause => "Advertising Clause",
            LicenseCategory::Attribution => "Attribution",
            LicenseCategory::Cc0OrPublicDomain => "CC0 or Public Domain",
            LicenseCategory::Copyleft => "Copyleft",
            LicenseCategory::Json => "JSON",
            LicenseCategory::ProprietaryNotices => "Proprietary Notices",
            LicenseCategory::StandardsBodies => "Standards Bodies",
            LicenseCategory::UseRestrictions => "Use Restrictions",
            LicenseCategory::WeakCopyleft => "Weak Copyleft",
            LicenseCategory::Other => "Other",
            LicenseCategory::NotFound => "Not found",
        }
    }
}

impl fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
