//! Configuration loading for ift.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use ift::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join("config");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("ift.yml"), "reload_templates: true").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert!(config.reload_templates);
//! assert_eq!(config.ledger_path(), temp.path().join("config").join("ift.cache"));
//! ```
//!
//! # Configuration File Location
//!
//! ift reads `config/ift.yml` under the project root when it exists, or the
//! file passed with `--config`. Every key is optional.

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, config_path, load_config, load_config_file, parse_config,
    RELOAD_TEMPLATES_ENV,
};
pub use schema::{
    IftConfig, DEFAULT_CONFIG_DIR, DEFAULT_JAVASCRIPTS_ROOT, DEFAULT_STYLESHEETS_ROOT,
    DEFAULT_VIEW_ROOT,
};
