//! Top-level Glueport configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AuditConfig, InferenceConfig, LedgerConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GLUEPORT_*`)
/// 2. Project config (`glueport.toml` in the migration root)
/// 3. User config (`~/.glueport/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlueportConfig {
    pub inference: InferenceConfig,
    pub audit: AuditConfig,
    pub ledger: LedgerConfig,
}

impl GlueportConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`GLUEPORT_*`)
    /// 2. Project config (`glueport.toml` in `root`)
    /// 3. User config (`~/.glueport/config.toml`)
    /// 4. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 2: project config
        let project_config_path = root.join("glueport.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GlueportConfig) -> Result<(), ConfigError> {
        if let Some(ratio) = config.inference.select_repeat_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::ValidationFailed {
                    field: "inference.select_repeat_ratio".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(max_options) = config.inference.select_max_options {
            if max_options == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "inference.select_max_options".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(min_length) = config.inference.textbox_min_length {
            if min_length == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "inference.textbox_min_length".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(max_bytes) = config.audit.max_document_bytes {
            if max_bytes == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "audit.max_document_bytes".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref path) = config.ledger.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "ledger.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.glueport/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GlueportConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: GlueportConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut GlueportConfig, other: &GlueportConfig) {
        // Inference
        if other.inference.select_max_options.is_some() {
            base.inference.select_max_options = other.inference.select_max_options;
        }
        if other.inference.select_repeat_ratio.is_some() {
            base.inference.select_repeat_ratio = other.inference.select_repeat_ratio;
        }
        if other.inference.textbox_min_length.is_some() {
            base.inference.textbox_min_length = other.inference.textbox_min_length;
        }
        if other.inference.show_in_list_count.is_some() {
            base.inference.show_in_list_count = other.inference.show_in_list_count;
        }

        // Audit
        if other.audit.max_document_bytes.is_some() {
            base.audit.max_document_bytes = other.audit.max_document_bytes;
        }
        if other.audit.required_empty_threshold.is_some() {
            base.audit.required_empty_threshold = other.audit.required_empty_threshold;
        }

        // Ledger
        if other.ledger.path.is_some() {
            base.ledger.path = other.ledger.path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GLUEPORT_SELECT_MAX_OPTIONS`, `GLUEPORT_MAX_DOCUMENT_BYTES`, etc.
    fn apply_env_overrides(config: &mut GlueportConfig) {
        if let Ok(val) = std::env::var("GLUEPORT_SELECT_MAX_OPTIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.inference.select_max_options = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLUEPORT_SELECT_REPEAT_RATIO") {
            if let Ok(v) = val.parse::<f64>() {
                config.inference.select_repeat_ratio = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLUEPORT_TEXTBOX_MIN_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.inference.textbox_min_length = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLUEPORT_SHOW_IN_LIST_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.inference.show_in_list_count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLUEPORT_MAX_DOCUMENT_BYTES") {
            if let Ok(v) = val.parse::<u64>() {
                config.audit.max_document_bytes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLUEPORT_LEDGER_PATH") {
            config.ledger.path = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.glueport/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".glueport"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
