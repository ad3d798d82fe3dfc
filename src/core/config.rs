//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quill/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::layout::{Breakpoints, DeviceClass};
use crate::core::theme::Theme;
use crate::core::view::Labels;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub md_breakpoint: Option<u16>,
    pub lg_breakpoint: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LabelsConfig {
    pub edit: Option<String>,
    pub save: Option<String>,
    pub cancel: Option<String>,
    pub publish: Option<String>,
    pub publish_short: Option<String>,
    pub unpublish: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DocumentConfig {
    pub title: Option<String>,
    pub pop_title: Option<String>,
    pub pop_des: Option<String>,
    pub permalink: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_POP_TITLE: &str = "Delete this document?";
pub const DEFAULT_POP_DES: &str = "This cannot be undone.";

// ============================================================================
// CLI overrides
// ============================================================================

/// Values taken from command-line flags. `None` / `false` = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub title: Option<String>,
    pub permalink: Option<String>,
    pub is_page: bool,
    pub is_draft: bool,
    pub device: Option<DeviceClass>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub breakpoints: Breakpoints,
    /// Forced device class; `None` means detect from terminal width.
    pub device: Option<DeviceClass>,
    pub labels: Labels,
    pub title: String,
    pub is_page: bool,
    pub is_draft: bool,
    pub pop_title: String,
    pub pop_des: String,
    pub permalink: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quill/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quill").join("config.toml"))
}

/// Load config from `~/.quill/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuillConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuillConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuillConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuillConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuillConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuillConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Quill Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                    # "light" or "dark" (or QUILL_THEME env var)

# [layout]
# md_breakpoint = 80                 # narrower terminals use the mobile layout
# lg_breakpoint = 120

# [labels]
# edit = "Edit title"
# save = "Save"
# cancel = "Cancel"
# publish = "Publish"
# publish_short = "Publish"          # used on narrow terminals
# unpublish = "Unpublish"

# [document]
# title = "Untitled"
# pop_title = "Delete this document?"
# pop_des = "This cannot be undone."
# permalink = "https://example.com/posts/untitled"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuillConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_theme = std::env::var("QUILL_THEME").ok();
    resolve_with_env(config, cli, env_theme.as_deref())
}

fn resolve_with_env(
    config: &QuillConfig,
    cli: &CliOverrides,
    env_theme: Option<&str>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| {
            env_theme.and_then(|name| {
                let parsed = Theme::from_name(name);
                if parsed.is_none() {
                    warn!("Ignoring unknown QUILL_THEME value: {}", name);
                }
                parsed
            })
        })
        .or(config.general.theme)
        .unwrap_or_default();

    let defaults = Breakpoints::default();
    let md = config.layout.md_breakpoint.unwrap_or(defaults.md);
    let lg = config.layout.lg_breakpoint.unwrap_or(defaults.lg);
    let breakpoints = if lg < md {
        warn!("lg_breakpoint {} is below md_breakpoint {}, clamping", lg, md);
        Breakpoints { md, lg: md }
    } else {
        Breakpoints { md, lg }
    };

    ResolvedConfig {
        theme,
        breakpoints,
        device: cli.device,
        labels: resolve_labels(&config.labels),
        title: cli
            .title
            .clone()
            .or_else(|| config.document.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        is_page: cli.is_page,
        is_draft: cli.is_draft,
        pop_title: config
            .document
            .pop_title
            .clone()
            .unwrap_or_else(|| DEFAULT_POP_TITLE.to_string()),
        pop_des: config
            .document
            .pop_des
            .clone()
            .unwrap_or_else(|| DEFAULT_POP_DES.to_string()),
        permalink: cli
            .permalink
            .clone()
            .or_else(|| config.document.permalink.clone()),
    }
}

fn resolve_labels(config: &LabelsConfig) -> Labels {
    let defaults = Labels::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    Labels {
        edit: pick(&config.edit, defaults.edit),
        save: pick(&config.save, defaults.save),
        cancel: pick(&config.cancel, defaults.cancel),
        publish: pick(&config.publish, defaults.publish),
        publish_short: pick(&config.publish_short, defaults.publish_short),
        unpublish: pick(&config.unpublish, defaults.unpublish),
    }
}
