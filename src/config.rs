//! Configuration file support for nuget-license-report.
//!
//! Provides YAML-based configuration through `license-report.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::report_generation::domain::{LicenseInfo, PackageReference};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub exclude_projects: Option<Vec<String>>,
    pub exclude_references: Option<Vec<String>>,
    pub output_file: Option<String>,
    pub additional_packages: Option<Vec<AdditionalPackage>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A package listed in the report without being resolved.
#[derive(Debug, Deserialize)]
pub struct AdditionalPackage {
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub license_type: Option<String>,
    pub license_url: Option<String>,
}

impl AdditionalPackage {
    pub fn to_package_reference(&self) -> PackageReference {
        PackageReference::new(self.name.trim(), self.version.trim()).with_license(
            LicenseInfo::new(self.license_type.clone(), self.license_url.clone()),
        )
    }
}

impl ConfigFile {
    /// Additional packages converted to report entries, in file order.
    pub fn additional_package_references(&self) -> Vec<PackageReference> {
        self.additional_packages
            .iter()
            .flatten()
            .map(AdditionalPackage::to_package_reference)
            .collect()
    }
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
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    log::debug!("Using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref packages) = config.additional_packages {
        for (i, entry) in packages.iter().enumerate() {
            if entry.name.trim().is_empty() {
                bail!(
                    "Invalid config: additional_packages[{}].name must not be empty.\n\n\
                     💡 Hint: Each additional_packages entry must have a non-empty 'name' field (e.g., \"SomeVendoredLib\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
exclude_projects:
  - Tests
  - Benchmarks
exclude_references:
  - Microsoft.
output_file: third-party.html
additional_packages:
  - name: SomeVendoredLib
    version: 2.0.0
    license_type: MIT
    license_url: https://example.com/license
  - name: Fonts
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.exclude_projects.as_deref(),
            Some(&["Tests".to_string(), "Benchmarks".to_string()][..])
        );
        assert_eq!(
            config.exclude_references.as_deref(),
            Some(&["Microsoft.".to_string()][..])
        );
        assert_eq!(config.output_file.as_deref(), Some("third-party.html"));

        let packages = config.additional_package_references();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name(), "SomeVendoredLib");
        assert_eq!(packages[0].version(), "2.0.0");
        assert_eq!(packages[0].license_type(), Some("MIT"));
        assert_eq!(packages[0].license_url(), Some("https://example.com/license"));
        assert_eq!(packages[1].version(), "");
        assert!(packages[1].license().is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "output_file: report\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().output_file.as_deref(), Some("report"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_package_name_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
additional_packages:
  - name: "   "
    version: 1.0.0
"#,
        )
        .unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("additional_packages[0].name must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
output_file: report.html
format: markdown
check_cve: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "{}\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.exclude_projects.is_none());
        assert!(config.additional_package_references().is_empty());
    }
}
