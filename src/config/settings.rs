use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::{CommitMessageSchema, FieldSchemaEntry};
use crate::ui::components::UnsavedEditsChoice;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Narrowest dialog that still fits the three buttons
const MIN_DIALOG_WIDTH: u16 = 48;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Title of the confirmation modal
    pub dialog_title: String,
    /// Button selected when the modal opens
    pub default_button: UnsavedEditsChoice,
    /// Preferred modal width in columns
    pub dialog_width: u16,
    /// Commit message fields used for icons and ordering
    pub schema: CommitMessageSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialog_title: "Save edits before splitting?".to_string(),
            default_button: UnsavedEditsChoice::Cancel,
            dialog_width: 64,
            schema: CommitMessageSchema::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlDialogConfig {
    pub title: Option<String>,
    pub default_button: Option<UnsavedEditsChoice>,
    pub width: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSchemaConfig {
    #[serde(default)]
    pub fields: Vec<FieldSchemaEntry>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub dialog: Option<TomlDialogConfig>,
    pub schema: Option<TomlSchemaConfig>,
}

impl Config {
    /// Load the user config, falling back to defaults when it is unusable.
    /// The example config is written on first run.
    pub fn load() -> Self {
        Self::load_or_create(&config_path())
    }

    fn load_or_create(config_file: &Path) -> Self {
        if !config_file.exists() {
            Self::create_default_config(config_file);
            return Self::default();
        }
        match Self::load_from(config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring config file");
                Self::default()
            }
        }
    }

    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    /// Load a specific config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config =
            toml::from_str::<TomlConfig>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::default().merge(toml_config)
    }

    /// Apply user settings on top of this config
    pub fn merge(mut self, toml_config: TomlConfig) -> Result<Self, ConfigError> {
        if let Some(dialog) = toml_config.dialog {
            if let Some(title) = dialog.title {
                if title.trim().is_empty() {
                    return Err(ConfigError::Invalid("dialog.title is empty".into()));
                }
                self.dialog_title = title;
            }
            if let Some(button) = dialog.default_button {
                self.default_button = button;
            }
            if let Some(width) = dialog.width {
                if width < MIN_DIALOG_WIDTH {
                    return Err(ConfigError::Invalid(format!(
                        "dialog.width must be at least {MIN_DIALOG_WIDTH}, got {width}"
                    )));
                }
                self.dialog_width = width;
            }
        }

        if let Some(schema) = toml_config.schema {
            if !schema.fields.is_empty() {
                let mut seen = HashSet::new();
                if let Some(dup) = schema.fields.iter().find(|f| !seen.insert(f.key.as_str())) {
                    return Err(ConfigError::Invalid(format!(
                        "schema field '{}' listed twice",
                        dup.key
                    )));
                }
                self.schema = CommitMessageSchema::new(schema.fields);
            }
        }

        Ok(self)
    }
}
