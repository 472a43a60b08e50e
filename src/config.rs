//! Site configuration module.
//!
//! Configuration is read once at startup into an immutable [`SiteConfig`] and
//! handed to every component explicitly. The server re-reads the file only when
//! asked to (SIGHUP); see [`crate::server`].
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_folder = "content"      # Root scanned for sections and documents
//! template_folder = "templates"   # Directory holding template.html
//! read_more_text = "Read more"    # Label of excerpt continuation links
//! articles_per_page = 10          # Page size of section listings
//! server_ip = "127.0.0.1:8080"    # Bind address
//! ```
//!
//! Config files are sparse: any key left out keeps its stock default. Unknown
//! keys are rejected to catch typos early.
//!
//! ## Legacy JSON Config
//!
//! A path ending in `.json` is read as JSON with the PascalCase keys of the
//! original server (`ContentFolder`, `TemplateFolder`, `ReadMoreText`,
//! `ArticlesPerPage`, `ServerIp`). Both spellings are accepted in either format.
//!
//! ## Relative Paths
//!
//! `content_folder` and `template_folder` are resolved against the directory
//! containing the config file, not the working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration.
///
/// All fields have defaults. Config files need only specify the values they
/// want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content root: one directory per section, one `.md` file per document.
    #[serde(alias = "ContentFolder")]
    pub content_folder: PathBuf,
    /// Directory containing `template.html`.
    #[serde(alias = "TemplateFolder")]
    pub template_folder: PathBuf,
    /// Label of the link appended to each excerpt in a listing.
    #[serde(alias = "ReadMoreText")]
    pub read_more_text: String,
    /// Number of directory entries per listing page.
    #[serde(alias = "ArticlesPerPage")]
    pub articles_per_page: usize,
    /// Address the HTTP server binds to (`host:port`).
    #[serde(alias = "ServerIp")]
    pub server_ip: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_folder: PathBuf::from("content"),
            template_folder: PathBuf::from("templates"),
            read_more_text: "Read more".to_string(),
            articles_per_page: 10,
            server_ip: "127.0.0.1:8080".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.articles_per_page == 0 {
            return Err(ConfigError::Validation(
                "articles_per_page must be at least 1".into(),
            ));
        }
        if self.content_folder.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content_folder must not be empty".into(),
            ));
        }
        if self.template_folder.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "template_folder must not be empty".into(),
            ));
        }
        self.bind_addr()?;
        Ok(())
    }

    /// Parsed `server_ip`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server_ip.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "server_ip must be a host:port socket address, got {:?}",
                self.server_ip
            ))
        })
    }

    /// Path of the page template.
    pub fn template_path(&self) -> PathBuf {
        self.template_folder.join("template.html")
    }

    /// Resolve relative folders against `base`.
    fn resolve_paths(&mut self, base: &Path) {
        if self.content_folder.is_relative() {
            self.content_folder = base.join(&self.content_folder);
        }
        if self.template_folder.is_relative() {
            self.template_folder = base.join(&self.template_folder);
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// `.json` files are parsed as JSON and converted, so both formats share the
/// same merge and validation path.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let value: serde_json::Value = serde_json::from_str(&content)?;
        toml::Value::try_from(value).map_err(|e| ConfigError::Validation(e.to_string()))
    } else {
        Ok(toml::from_str(&content)?)
    }
}

/// Merge an overlay onto a base value, then deserialize and validate.
///
/// Original PascalCase keys are folded onto their snake_case spelling first,
/// otherwise an override would be merged next to the stock key instead of
/// replacing it.
pub fn resolve_config(base: toml::Value, overlay: toml::Value) -> Result<SiteConfig, ConfigError> {
    let merged = merge_toml(base, normalize_keys(overlay));
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`.
///
/// Merges file values on top of stock defaults, rejects unknown keys,
/// resolves relative folders against the file's directory, and validates.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    let mut config = resolve_config(stock_defaults_value(), overlay)?;
    let base = path.parent().unwrap_or(Path::new("."));
    config.resolve_paths(base);
    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

const LEGACY_KEYS: &[(&str, &str)] = &[
    ("ContentFolder", "content_folder"),
    ("TemplateFolder", "template_folder"),
    ("ReadMoreText", "read_more_text"),
    ("ArticlesPerPage", "articles_per_page"),
    ("ServerIp", "server_ip"),
];

fn normalize_keys(value: toml::Value) -> toml::Value {
    match value {
        toml::Value::Table(table) => toml::Value::Table(
            table
                .into_iter()
                .map(|(key, val)| {
                    let key = LEGACY_KEYS
                        .iter()
                        .find(|(legacy, _)| *legacy == key)
                        .map(|(_, snake)| snake.to_string())
                        .unwrap_or(key);
                    (key, val)
                })
                .collect(),
        ),
        other => other,
    }
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Pages Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Relative paths are resolved against the directory holding this file.

# Content root. Each sub-directory is a section (menu entry); each .md file
# inside a section is a document. Prefix directory names with digits and a
# dash (1-blog, 2-about) to force their menu order; the prefix is not shown.
content_folder = "content"

# Directory holding template.html, the page template.
template_folder = "templates"

# Label of the link shown below each excerpt in a multi-document section.
read_more_text = "Read more"

# Number of entries per page in a section listing.
articles_per_page = 10

# Address the server listens on (host:port).
server_ip = "127.0.0.1:8080"
"##
}
