//! YAML Configuration File Support
//!
//! This module loads detector settings from a single YAML file so repeated
//! comparisons can share one tuple size, one canonicalization policy and
//! one input-path convention.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Tuplecheck configuration
//! version: "1.0"
//!
//! canonical:
//!   lowercase: true
//!   keep_leading_empty_token: true
//!
//! overlap:
//!   tuple_size: 3
//!   use_parallel: false
//!
//! input:
//!   default_extension: "txt"
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! defaults shown above.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use canonical::CanonicalizeConfig;
use overlap::{OverlapConfig, DEFAULT_TUPLE_SIZE};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a comparison run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct DetectorConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    /// Canonicalization stage configuration
    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    /// Overlap engine configuration
    #[serde(default)]
    pub overlap: OverlapYamlConfig,

    /// Input path handling
    #[serde(default)]
    pub input: InputYamlConfig,
}

impl DetectorConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DetectorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// The tuple size is not checked here; a non-positive `N` is reported per
    /// comparison by the overlap engine.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.input.validate()?;

        Ok(())
    }

    /// Canonicalization settings for [`canonical::canonicalize`].
    pub fn canonical_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            lowercase: self.canonical.lowercase,
            keep_leading_empty_token: self.canonical.keep_leading_empty_token,
        }
    }

    /// Overlap settings for [`overlap::tuple_overlap_bounded`].
    pub fn overlap_config(&self) -> OverlapConfig {
        OverlapConfig::new()
            .with_tuple_size(self.overlap.tuple_size)
            .with_parallel(self.overlap.use_parallel)
    }

    /// Replace the configured tuple size.
    pub fn with_tuple_size(mut self, tuple_size: i32) -> Self {
        self.overlap.tuple_size = tuple_size;
        self
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            canonical: CanonicalYamlConfig::default(),
            overlap: OverlapYamlConfig::default(),
            input: InputYamlConfig::default(),
        }
    }
}

/// Canonicalization stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalYamlConfig {
    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "true_value")]
    pub keep_leading_empty_token: bool,
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            keep_leading_empty_token: true,
        }
    }
}

/// Overlap engine YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlapYamlConfig {
    #[serde(default = "default_tuple_size")]
    pub tuple_size: i32,

    #[serde(default)]
    pub use_parallel: bool,
}

impl Default for OverlapYamlConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
            use_parallel: false,
        }
    }
}

/// Input path YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputYamlConfig {
    /// Extension appended to file arguments that lack it. `null` disables
    /// the rewrite.
    #[serde(default = "default_extension")]
    pub default_extension: Option<String>,
}

impl InputYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(ext) = &self.default_extension {
            if ext.is_empty() {
                return Err(ConfigLoadError::Validation(
                    "input.default_extension must not be empty (use null to disable)".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(ConfigLoadError::Validation(format!(
                    "input.default_extension must not start with '.' (got {ext:?})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for InputYamlConfig {
    fn default() -> Self {
        Self {
            default_extension: default_extension(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
fn true_value() -> bool {
    true
}
fn default_tuple_size() -> i32 {
    DEFAULT_TUPLE_SIZE
}
fn default_extension() -> Option<String> {
    Some("txt".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
canonical:
  lowercase: false
overlap:
  tuple_size: 4
"#;

        let config = DetectorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert!(!config.canonical.lowercase);
        assert!(config.canonical.keep_leading_empty_token);
        assert_eq!(config.overlap.tuple_size, 4);
        assert!(!config.overlap.use_parallel);
        assert_eq!(config.input.default_extension.as_deref(), Some("txt"));
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
overlap:
  tuple_size: 2
  use_parallel: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = DetectorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.overlap_config().tuple_size, 2);
        assert!(config.overlap_config().use_parallel);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = DetectorConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.canonical_config(), CanonicalizeConfig::default());
        assert_eq!(config.overlap_config(), OverlapConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DetectorConfig::from_yaml("{}").unwrap();
        assert_eq!(config, DetectorConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = DetectorConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_extension_validation() {
        let result = DetectorConfig::from_yaml("input:\n  default_extension: \".txt\"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must not start with"));

        let result = DetectorConfig::from_yaml("input:\n  default_extension: \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_extension_can_be_disabled() {
        let config = DetectorConfig::from_yaml("input:\n  default_extension: null\n").unwrap();
        assert!(config.input.default_extension.is_none());
    }

    #[test]
    fn test_non_positive_tuple_size_is_loadable() {
        let config = DetectorConfig::from_yaml("overlap:\n  tuple_size: 0\n").unwrap();
        assert_eq!(config.overlap_config().tuple_size, 0);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = DetectorConfig::from_yaml("overlap: [unclosed");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_with_tuple_size_overrides() {
        let config = DetectorConfig::default().with_tuple_size(7);
        assert_eq!(config.overlap_config().tuple_size, 7);
    }
}
