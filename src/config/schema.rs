//! Configuration schema.
//!
//! Maps to the `config/ift.yml` file format:
//!
//! ```yaml
//! config_dir: config
//! view_root: app/views
//! stylesheets_root: public/stylesheets
//! javascripts_root: public/javascripts
//! reload_templates: false
//! garbage_collect: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory holding `ift.yml` and the `ift.cache` ledger.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Template root used when `view_root` is not set.
pub const DEFAULT_VIEW_ROOT: &str = "app/views";

/// Stylesheet root used when `stylesheets_root` is not set.
pub const DEFAULT_STYLESHEETS_ROOT: &str = "public/stylesheets";

/// Script root used when `javascripts_root` is not set.
pub const DEFAULT_JAVASCRIPTS_ROOT: &str = "public/javascripts";

/// Settings for template extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IftConfig {
    /// Directory holding the ledger file.
    pub config_dir: PathBuf,

    /// Custom view root. When set it is also registered as an extra
    /// template search root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_root: Option<PathBuf>,

    /// Destination for stylesheet blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheets_root: Option<PathBuf>,

    /// Destination for javascript blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascripts_root: Option<PathBuf>,

    /// Rebuild templates on every render instead of once per owner.
    pub reload_templates: bool,

    /// Remove previously generated files before each rebuild.
    pub garbage_collect: bool,
}

impl Default for IftConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            view_root: None,
            stylesheets_root: None,
            javascripts_root: None,
            reload_templates: false,
            garbage_collect: true,
        }
    }
}

impl IftConfig {
    /// Make every relative path absolute against the project root.
    pub fn resolve(mut self, project_root: &Path) -> Self {
        let anchor = |p: PathBuf| {
            if p.is_absolute() {
                p
            } else {
                project_root.join(p)
            }
        };

        self.config_dir = anchor(self.config_dir);
        self.view_root = self.view_root.map(anchor);
        self.stylesheets_root = self.stylesheets_root.map(anchor);
        self.javascripts_root = self.javascripts_root.map(anchor);
        self
    }

    /// Path of the `ift.cache` ledger.
    pub fn ledger_path(&self) -> PathBuf {
        crate::ledger::ledger_path(&self.config_dir)
    }

    /// Effective view root.
    pub fn view_dir(&self) -> PathBuf {
        self.view_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VIEW_ROOT))
    }

    /// Effective stylesheet root.
    pub fn stylesheets_dir(&self) -> PathBuf {
        self.stylesheets_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STYLESHEETS_ROOT))
    }

    /// Effective javascript root.
    pub fn javascripts_dir(&self) -> PathBuf {
        self.javascripts_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JAVASCRIPTS_ROOT))
    }
}
