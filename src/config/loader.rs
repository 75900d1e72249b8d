//! Configuration file discovery and loading.

use crate::config::schema::{IftConfig, DEFAULT_CONFIG_DIR};
use crate::error::{IftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `reload_templates`.
pub const RELOAD_TEMPLATES_ENV: &str = "IFT_RELOAD_TEMPLATES";

/// Default config file location for a project: `config/ift.yml`.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(DEFAULT_CONFIG_DIR).join("ift.yml")
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<IftConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IftError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IftError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`IftConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<IftConfig> {
    if content.trim().is_empty() {
        return Ok(IftConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| IftError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply environment overrides using the given lookup.
pub fn apply_env_overrides<F>(mut config: IftConfig, lookup: F) -> IftConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(RELOAD_TEMPLATES_ENV) {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => config.reload_templates = true,
            "0" | "false" | "no" | "off" | "" => config.reload_templates = false,
            other => tracing::warn!("Ignoring {}={}", RELOAD_TEMPLATES_ENV, other),
        }
    }
    config
}

/// Load the configuration for a project.
///
/// If `config_override` is provided that file must exist. Otherwise
/// `config/ift.yml` is used when present and defaults apply when it is not.
/// Environment overrides are applied and relative paths are anchored at
/// `project_root`.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<IftConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => {
            let path = config_path(project_root);
            if path.exists() {
                load_config_file(&path)?
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                IftConfig::default()
            }
        }
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    Ok(config.resolve(project_root))
}
