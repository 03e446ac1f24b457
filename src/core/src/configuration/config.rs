use super::types::*;
use crate::error_handling::types::ConfigError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure that defines all runtime parameters.
///
/// Values come from three layers, later ones winning:
/// 1. built-in defaults ([`Config::default`])
/// 2. an optional TOML file ([`Config::from_file`]); missing keys keep their defaults
/// 3. command-line flags and environment variables ([`ConfigOverrides`])
///
/// # Examples
///
/// ```
/// use quotegen::configuration::Config;
///
/// let config = Config::from_toml_str("storage_path = \"/tmp/quotes\"\ndedupe_imports = false").unwrap();
/// assert!(!config.dedupe_imports);
/// assert!(config.export_metadata);
/// ```
///
/// # Fields Overview
///
/// - `storage_path`: directory holding the durable slots (the saved quotes)
/// - `session_scope`: where the selected category and last shown quote are kept
/// - `dedupe_imports`: skip imported quotes whose normalized text already exists
/// - `export_metadata`: wrap exports with export date, version and count
/// - `sync_category`: category given to quotes pulled by the server sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage_path: PathBuf,
    pub session_scope: SessionScope,
    pub dedupe_imports: bool,
    pub export_metadata: bool,
    pub sync_category: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(Self::DEFAULT_STORAGE_DIR),
            session_scope: SessionScope::default(),
            dedupe_imports: true,
            export_metadata: true,
            sync_category: String::from("Server"),
        }
    }
}

impl Config {
    /// Default storage directory, relative to the working directory
    pub const DEFAULT_STORAGE_DIR: &'static str = ".quotegen";

    /// Reads and validates a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        info!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line and environment overrides, then re-validates.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Config, ConfigError> {
        if let Some(ref path) = overrides.storage_path {
            debug!("Storage path overridden to {}", path.display());
            self.storage_path = path.clone();
        }
        if overrides.no_dedupe {
            self.dedupe_imports = false;
        }
        if overrides.bare_export {
            self.export_metadata = false;
        }
        if overrides.process_session {
            self.session_scope = SessionScope::Process;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("storage_path".into()));
        }
        if self.storage_path.exists() && !self.storage_path.is_dir() {
            return Err(ConfigError::DirectoryDoesNotExist(format!(
                "{} exists but is not a directory",
                self.storage_path.display()
            )));
        }
        if self.sync_category.trim().is_empty() {
            return Err(ConfigError::EmptyValue("sync_category".into()));
        }
        Ok(())
    }

    /// Directory for session slots, or `None` when they are kept in memory.
    pub fn session_path(&self) -> Option<PathBuf> {
        match self.session_scope {
            SessionScope::Directory => Some(self.storage_path.join("session")),
            SessionScope::Process => None,
        }
    }
}

/// Command-line overrides for [`Config`].
///
/// Flattened into the binary's argument parser.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Directory holding the saved quotes
    ///
    /// # Command Line
    /// Use `--storage-path <DIR>` or the `QUOTEGEN_STORAGE_DIR` environment variable
    #[arg(long, env = "QUOTEGEN_STORAGE_DIR", global = true)]
    pub storage_path: Option<PathBuf>,

    /// Keep duplicate quotes when importing
    #[arg(long, action = clap::ArgAction::SetTrue, global = true)]
    pub no_dedupe: bool,

    /// Export a bare array of quotes without metadata
    #[arg(long, action = clap::ArgAction::SetTrue, global = true)]
    pub bare_export: bool,

    /// Keep the selected category and last quote in memory only
    #[arg(long, action = clap::ArgAction::SetTrue, global = true)]
    pub process_session: bool,
}
