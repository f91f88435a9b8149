// File: src/config.rs
// Purpose: Form configuration parsing from order-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum length of the trimmed full name, in characters (default: 3)
    #[serde(default = "default_full_name_min_length")]
    pub full_name_min_length: usize,
}

/// Messages shown next to each field when a rule fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_full_name_required")]
    pub full_name_required: String,

    #[serde(default = "default_full_name_too_short")]
    pub full_name_too_short: String,

    #[serde(default = "default_size_required")]
    pub size_required: String,
}

// Default values
fn default_full_name_min_length() -> usize {
    3
}

fn default_full_name_required() -> String {
    "full name is required".to_string()
}

fn default_full_name_too_short() -> String {
    "full name must be at least 3 characters".to_string()
}

fn default_size_required() -> String {
    "size must be S or M or L".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            full_name_min_length: default_full_name_min_length(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            full_name_required: default_full_name_required(),
            full_name_too_short: default_full_name_too_short(),
            size_required: default_size_required(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./order-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("order-form.toml")
    }

    /// Parse configuration from TOML text. Blank text gives the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content)?;
        Ok(config)
    }
}
