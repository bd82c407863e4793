use crate::license_compliance::domain::{Dependency, LicenseInfo, Threat};

/// Review statuses under which a reviewer's override is authoritative
pub const OVERRIDE_STATUSES: [&str; 2] = ["Overridden", "Selected"];

/// Which license view of a dependency is authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseView {
    Final,
    Effective,
}

/// LicensePriority policy for determining which license view wins
///
/// This policy encodes the business rule for selecting license information
/// when a dependency carries several views:
///
/// 1. status `"Overridden"` or `"Selected"` (exact match): the final
///    (overridden) licenses and the overridden threat
/// 2. any other status: the effective licenses and the effective threat
pub struct LicensePriority;

impl LicensePriority {
    /// Selects the authoritative view for a review status
    pub fn select_view(status: &str) -> LicenseView {
        if OVERRIDE_STATUSES.contains(&status) {
            LicenseView::Final
        } else {
            LicenseView::Effective
        }
    }

    /// Creates the authoritative LicenseInfo for a dependency
    ///
    /// # Returns
    /// LicenseInfo with sorted licenses, the matching threat and the status
    pub fn create_license_info(dependency: &Dependency) -> LicenseInfo {
        let (licenses, threat): (&[String], Threat) =
            match Self::select_view(dependency.status()) {
                LicenseView::Final => (
                    dependency.final_licenses(),
                    dependency.overridden_license_threat(),
                ),
                LicenseView::Effective => (
                    dependency.effective_licenses(),
                    dependency.effective_license_threat(),
                ),
            };

        LicenseInfo::new(licenses.to_vec(), threat, dependency.status().to_string())
    }
}
