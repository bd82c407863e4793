use std::fmt;

const KEY_SEPARATOR: &str = " : ";

/// Coordinates value object identifying one third-party component.
///
/// The coordinate key is `"group : artifact : version"` when a group is
/// present and `"artifact : version"` otherwise. Two components are the same
/// entity if and only if their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    group_id: Option<String>,
    artifact_id: String,
    version: String,
}

impl Coordinates {
    /// Creates coordinates, treating an empty group as absent
    pub fn new(group_id: Option<String>, artifact_id: String, version: String) -> Self {
        Self {
            group_id: group_id.filter(|g| !g.is_empty()),
            artifact_id,
            version,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the catalog key for these coordinates
    pub fn key(&self) -> String {
        Self::key_for(self.group_id(), &self.artifact_id, &self.version)
    }

    /// Builds a catalog key from loose parts
    pub fn key_for(group_id: Option<&str>, artifact_id: &str, version: &str) -> String {
        match group_id.filter(|g| !g.is_empty()) {
            Some(group) => format!(
                "{}{}{}{}{}",
                group, KEY_SEPARATOR, artifact_id, KEY_SEPARATOR, version
            ),
            None => format!("{}{}{}", artifact_id, KEY_SEPARATOR, version),
        }
    }

    /// Parses a catalog key back into coordinates.
    ///
    /// Returns `None` unless the key has exactly two or three segments.
    pub fn parse_key(key: &str) -> Option<Self> {
        let parts: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        match parts.as_slice() {
            [artifact, version] => Some(Self::new(
                None,
                artifact.to_string(),
                version.to_string(),
            )),
            [group, artifact, version] => Some(Self::new(
                Some(group.to_string()),
                artifact.to_string(),
                version.to_string(),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
