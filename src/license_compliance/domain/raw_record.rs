use super::{Coordinates, Threat};
use crate::shared::error::ReportError;
use serde_json::{Map, Value};

/// One dependency record from a `licenses.json` export, parsed into named
/// optional fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDependencyRecord {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub status: Option<String>,
    pub overridden_licenses: Vec<String>,
    pub effective_licenses: Vec<String>,
    pub observed_licenses: Vec<String>,
    pub declared_licenses: Vec<String>,
    pub overridden_license_threat: Threat,
    pub effective_license_threat: Threat,
    /// `componentIdentifier.coordinates.name`
    pub fallback_name: Option<String>,
    /// `componentIdentifier.coordinates.version`
    pub fallback_version: Option<String>,
}

impl RawDependencyRecord {
    /// Parses a JSON value into a record.
    ///
    /// # Errors
    /// Returns `ReportError::MalformedRecord` if the value is not a JSON object.
    pub fn parse(value: &Value) -> Result<Self, ReportError> {
        let object = value.as_object().ok_or_else(|| ReportError::MalformedRecord {
            reason: format!("expected a JSON object, found {}", json_type_name(value)),
        })?;

        let fallback = object
            .get("componentIdentifier")
            .and_then(|c| c.get("coordinates"))
            .and_then(Value::as_object);

        Ok(Self {
            group_id: string_field(object, "groupId"),
            artifact_id: string_field(object, "artifactId"),
            version: string_field(object, "version"),
            status: string_field(object, "status"),
            overridden_licenses: license_list(object, "overriddenLicenses"),
            effective_licenses: license_list(object, "effectiveLicenses"),
            observed_licenses: license_list(object, "observedLicenses"),
            declared_licenses: license_list(object, "declaredLicenses"),
            overridden_license_threat: Threat::from_json(object.get("overriddenLicenseThreat")),
            effective_license_threat: Threat::from_json(object.get("effectiveLicenseThreat")),
            fallback_name: fallback.and_then(|c| string_field(c, "name")),
            fallback_version: fallback.and_then(|c| string_field(c, "version")),
        })
    }

    /// Resolves the component coordinates.
    ///
    /// Uses `groupId`/`artifactId`/`version` when an artifact id is present,
    /// otherwise the nested `componentIdentifier.coordinates` name and version
    /// with no group. A missing version becomes the empty string.
    ///
    /// # Errors
    /// Returns `ReportError::MalformedRecord` when neither path names the artifact.
    pub fn coordinates(&self) -> Result<Coordinates, ReportError> {
        if let Some(artifact) = non_blank(&self.artifact_id) {
            return Ok(Coordinates::new(
                self.group_id.clone(),
                artifact.to_string(),
                self.version.clone().unwrap_or_default(),
            ));
        }

        if let Some(name) = non_blank(&self.fallback_name) {
            return Ok(Coordinates::new(
                None,
                name.to_string(),
                self.fallback_version.clone().unwrap_or_default(),
            ));
        }

        Err(ReportError::MalformedRecord {
            reason: "record has neither artifactId nor componentIdentifier.coordinates.name"
                .to_string(),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn license_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
