//! Configuration file support for iq-license-report.
//!
//! The config file lives at `~/.nexusiq/config.json` unless `--config` names
//! another one. It is parsed with a YAML parser, so both the JSON files of
//! existing installations and YAML files work. Command-line flags override
//! config values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::license_compliance::catalog::DEFAULT_HIGH_RISK_THRESHOLD;
use crate::shared::error::ReportError;
use crate::shared::Result;

const CONFIG_DIR: &str = ".nexusiq";
const CONFIG_FILENAME: &str = "config.json";

/// Keys used by the service and CI integrations. They are accepted without a
/// warning but have no effect on offline report generation.
const IGNORED_FIELDS: &[&str] = &[
    "username",
    "password",
    "baseurl",
    "jenkinsBaseurl",
    "pdfReportsDir",
    "statusJSON",
];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub organization_id: Option<String>,
    pub json_dir: Option<PathBuf>,
    pub reports_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub high_risk_threshold: Option<u32>,
    /// Captures every other key, for warnings.
    #[serde(flatten)]
    pub other_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Keys that are neither known nor deliberately ignored
    pub fn unknown_fields(&self) -> Vec<&str> {
        self.other_fields
            .keys()
            .map(String::as_str)
            .filter(|key| !IGNORED_FIELDS.contains(key))
            .collect()
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub organization_id: Option<String>,
    pub json_dir: Option<PathBuf>,
    pub reports_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub high_risk_threshold: Option<u32>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub organization_id: String,
    pub json_dir: PathBuf,
    /// `None` only when output goes to stdout
    pub reports_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub high_risk_threshold: u32,
}

/// `~/.nexusiq/config.json`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid JSON or YAML.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    eprintln!("📄 Loaded config from: {}", path.display());

    Ok(config)
}

/// Loads the config named on the command line, or the default one.
///
/// An explicit path must exist. A missing default config yields an empty
/// configuration so that flags alone can drive a run.
pub fn load_config(explicit_path: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        Some(path) => {
            tracing::debug!(path = %path.display(), "no default config file");
            Ok(ConfigFile::default())
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Merges config and overrides, reporting every missing required key at once.
///
/// `reportsDir` is only required when reports are written to disk.
pub fn resolve_settings(
    config: &ConfigFile,
    overrides: ConfigOverrides,
    require_reports_dir: bool,
) -> Result<ResolvedSettings> {
    let organization_id = overrides
        .organization_id
        .or_else(|| config.organization_id.clone())
        .filter(|id| !id.trim().is_empty());
    let json_dir = overrides.json_dir.or_else(|| config.json_dir.clone());
    let reports_dir = overrides.reports_dir.or_else(|| config.reports_dir.clone());

    let mut missing = Vec::new();
    if organization_id.is_none() {
        missing.push("organizationId (--org)");
    }
    if json_dir.is_none() {
        missing.push("jsonDir (--json-dir)");
    }
    if require_reports_dir && reports_dir.is_none() {
        missing.push("reportsDir (--reports-dir)");
    }
    if !missing.is_empty() {
        return Err(ReportError::Validation {
            message: format!(
                "Missing required configuration: {}\n\n💡 Hint: Set them in {} or pass the flags shown.",
                missing.join(", "),
                default_config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "the config file".to_string())
            ),
        }
        .into());
    }

    let format = match overrides.format {
        Some(format) => format,
        None => match config.format.as_deref() {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|message| ReportError::Validation { message })?,
            None => OutputFormat::default(),
        },
    };

    Ok(ResolvedSettings {
        organization_id: organization_id.unwrap_or_default(),
        json_dir: json_dir.unwrap_or_default(),
        reports_dir,
        format,
        high_risk_threshold: overrides
            .high_risk_threshold
            .or(config.high_risk_threshold)
            .unwrap_or(DEFAULT_HIGH_RISK_THRESHOLD),
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref org) = config.organization_id {
        if org.trim().is_empty() {
            bail!(
                "Invalid config: organizationId must not be empty.\n\n\
                 💡 Hint: Use the organization id shown by the policy service."
            );
        }
    }
    if let Some(ref format) = config.format {
        if let Err(message) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", message);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
