use super::{Coordinates, RawDependencyRecord, Threat};
use crate::license_compliance::policies::LicenseNormalizer;
use crate::shared::error::ReportError;
use std::collections::BTreeSet;

/// Dependency entity: one resolved third-party component with its license
/// views, threat scores, review status and referencing applications.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    coordinates: Coordinates,
    status: String,
    final_licenses: Vec<String>,
    effective_licenses: Vec<String>,
    observed_licenses: Vec<String>,
    declared_licenses: Vec<String>,
    overridden_license_threat: Threat,
    effective_license_threat: Threat,
    app_names: BTreeSet<String>,
}

impl Dependency {
    /// Builds a dependency from a parsed record.
    ///
    /// # Errors
    /// Returns `ReportError::MalformedRecord` if the record has no usable coordinates.
    pub fn from_record(record: RawDependencyRecord) -> Result<Self, ReportError> {
        let coordinates = record.coordinates()?;
        Ok(Self {
            coordinates,
            status: record.status.unwrap_or_default(),
            final_licenses: record.overridden_licenses,
            effective_licenses: record.effective_licenses,
            observed_licenses: record.observed_licenses,
            declared_licenses: record.declared_licenses,
            overridden_license_threat: record.overridden_license_threat,
            effective_license_threat: record.effective_license_threat,
            app_names: BTreeSet::new(),
        })
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn key(&self) -> String {
        self.coordinates.key()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Licenses set by a reviewer override
    pub fn final_licenses(&self) -> &[String] {
        &self.final_licenses
    }

    pub fn effective_licenses(&self) -> &[String] {
        &self.effective_licenses
    }

    pub fn observed_licenses(&self) -> &[String] {
        &self.observed_licenses
    }

    pub fn declared_licenses(&self) -> &[String] {
        &self.declared_licenses
    }

    pub fn overridden_license_threat(&self) -> Threat {
        self.overridden_license_threat
    }

    pub fn effective_license_threat(&self) -> Threat {
        self.effective_license_threat
    }

    /// Applications that reference this dependency, sorted
    pub fn app_names(&self) -> &BTreeSet<String> {
        &self.app_names
    }

    pub fn add_app_name(&mut self, app_name: &str) {
        self.app_names.insert(app_name.to_string());
    }

    pub(crate) fn extend_app_names(&mut self, names: BTreeSet<String>) {
        self.app_names.extend(names);
    }

    /// Declared, observed and effective views combined into one expression
    pub fn detected_license_expression(&self) -> String {
        LicenseNormalizer::combine_license_views(
            &self.declared_licenses,
            &self.observed_licenses,
            &self.effective_licenses,
        )
    }
}
