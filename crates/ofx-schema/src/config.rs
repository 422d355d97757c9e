//! # Validator Configuration
//!
//! Controls how validation passes behave. Loaded from YAML or JSON, chosen
//! by file extension (`.yaml`/`.yml` for YAML, anything else as JSON):
//!
//! ```yaml
//! mode: lenient
//! reject_unknown_fields: false
//! ```
//!
//! Both keys are optional. The defaults are strict mode with unknown
//! fields rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::validate::ValidationMode;

/// Validation pass settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Strict or lenient.
    #[serde(default)]
    pub mode: ValidationMode,
    /// Report raw fields the schema does not declare.
    #[serde(default = "default_reject_unknown_fields")]
    pub reject_unknown_fields: bool,
}

fn default_reject_unknown_fields() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            reject_unknown_fields: default_reject_unknown_fields(),
        }
    }
}

impl ValidatorConfig {
    /// Strict mode, unknown fields rejected.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient mode, unknown fields rejected.
    pub fn lenient() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    /// Parse from a YAML string. JSON documents are valid YAML too.
    ///
    /// # Errors
    ///
    /// `SchemaError::ConfigLoad` if the text is not a valid config.
    pub fn from_yaml_str(text: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(text).map_err(|e| SchemaError::ConfigLoad {
            path: "<inline>".to_string(),
            reason: format!("invalid YAML: {e}"),
        })
    }

    /// Load from a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// `SchemaError::ConfigLoad` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::ConfigLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

        let parsed = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| format!("invalid YAML: {e}"))
        } else {
            serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {e}"))
        };

        let config = parsed.map_err(|reason| SchemaError::ConfigLoad {
            path: path.display().to_string(),
            reason,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded validator config");
        Ok(config)
    }
}
