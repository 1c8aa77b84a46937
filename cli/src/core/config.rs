//! # cbrs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration used by the
//! `cbrs` binary when it builds commands: the base capacity of the argument
//! buffers and whether unsafe arguments are quoted.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.cbrs.toml` in the current directory or its ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/cbrs/config.toml`
//! 3. Default values defined in the code
//!
//! Each file is parsed into a `ConfigLayer` whose fields are all optional.
//! Layers are applied over the defaults from lowest to highest precedence, so
//! any key a file sets explicitly wins over the layers below it, even when
//! the value equals the built-in default. Unknown keys are rejected.
//!
//! ## Examples
//!
//! ```toml
//! [buffer]
//! base_capacity = 128
//!
//! [command]
//! quote_unsafe_args = false
//! ```
//!
//! ```rust,no_run
//! use cbrs::common::command::Cmd;
//!
//! let cfg = cbrs::core::config::load_config()?;
//! let mut cmd = Cmd::with_options(
//!     cfg.quote_policy(),
//!     cfg.buffer.base_capacity,
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::buffer::DEFAULT_BASE_CAPACITY;
use crate::common::command::QuotePolicy;
use crate::core::error::{CbError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The effective configuration after all layers are merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub buffer: BufferConfig,
    pub command: CommandConfig,
}

/// Growable buffer tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferConfig {
    /// Capacity an argument buffer grows to on its first push.
    pub base_capacity: usize,
}

/// Command building behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    /// Wrap arguments containing unsafe characters in double quotes.
    pub quote_unsafe_args: bool,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            base_capacity: DEFAULT_BASE_CAPACITY,
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            quote_unsafe_args: true,
        }
    }
}

impl Config {
    pub fn quote_policy(&self) -> QuotePolicy {
        if self.command.quote_unsafe_args {
            QuotePolicy::QuoteUnsafe
        } else {
            QuotePolicy::Verbatim
        }
    }

    /// Overrides every field the layer sets; unset fields keep their value.
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(base_capacity) = layer.buffer.base_capacity {
            self.buffer.base_capacity = base_capacity;
        }
        if let Some(quote_unsafe_args) = layer.command.quote_unsafe_args {
            self.command.quote_unsafe_args = quote_unsafe_args;
        }
    }
}

/// One configuration file as written, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub buffer: BufferLayer,
    #[serde(default)]
    pub command: CommandLayer,
}

/// The `[buffer]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BufferLayer {
    pub base_capacity: Option<usize>,
}

/// The `[command]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommandLayer {
    pub quote_unsafe_args: Option<bool>,
}

const PROJECT_CONFIG_FILENAME: &str = ".cbrs.toml";

/// Loads the merged user and project configuration and validates it.
pub fn load_config() -> Result<Config> {
    let user_layer = load_user_config()?;
    let project_layer = load_project_config()?;
    let merged_config = merge_configs(user_layer, project_layer);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "cbrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_layer_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_layer_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.cbrs.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads and parses one TOML configuration file.
pub fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies the user layer, then the project layer, over the defaults.
fn merge_configs(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> Config {
    let mut merged = Config::default();
    for layer in [user, project].into_iter().flatten() {
        merged.apply(layer);
    }
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    if config.buffer.base_capacity == 0 {
        return Err(anyhow!(CbError::Config(
            "buffer.base_capacity must be greater than zero".to_string()
        )));
    }
    Ok(())
}
