//! Configuration management for tabkit.
//!
//! Parses `tabkit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `tabs.id`
//! - `tabs.id_prefix`

mod expand;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tabkit::{ClientOptions, DEFAULT_ID_PREFIX, RenderContext, TabsConfig};
use tabkit_html::Attributes;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override label escaping.
    pub encode_labels: Option<bool>,
    /// Override the widget container id.
    pub id: Option<String>,
    /// Override whether rendered output includes the client script block.
    pub include_scripts: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tabkit.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab widget defaults.
    pub tabs: TabsSection,
    /// Output configuration.
    pub output: OutputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tab widget defaults (`[tabs]` section).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TabsSection {
    /// Whether to HTML-escape tab labels.
    pub encode_labels: bool,
    /// Fixed container id. Generated from `id_prefix` when unset.
    pub id: Option<String>,
    /// Prefix for generated widget ids.
    pub id_prefix: String,
    /// Attributes for the header `<ul>`.
    pub options: Attributes,
    /// Default attributes for pane `<div>`s.
    pub item_options: Attributes,
    /// Default attributes for header `<li>`s.
    pub header_options: Attributes,
    /// Options for the `tab` client plugin, or `false` to skip registration.
    pub client_options: ClientOptions,
    /// Client event name to JavaScript handler.
    pub client_events: IndexMap<String, String>,
}

impl Default for TabsSection {
    fn default() -> Self {
        Self {
            encode_labels: true,
            id: None,
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            options: Attributes::new(),
            item_options: Attributes::new(),
            header_options: Attributes::new(),
            client_options: ClientOptions::default(),
            client_events: IndexMap::new(),
        }
    }
}

/// Output configuration (`[output]` section).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Append a `<script>` block with registered client plugins.
    pub include_scripts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_scripts: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`tabs.id`").
        field: String,
        /// Error message (e.g., "${`PAGE_ID`} not set").
        message: String,
    },
}

/// Require a string field to be a usable HTML id fragment.
fn require_id_fragment(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain whitespace"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tabkit.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(encode_labels) = settings.encode_labels {
            self.tabs.encode_labels = encode_labels;
        }
        if let Some(id) = &settings.id {
            self.tabs.id = Some(id.clone());
        }
        if let Some(include_scripts) = settings.include_scripts {
            self.output.include_scripts = include_scripts;
        }
    }

    /// Widget settings for a [`tabkit::Tabs`] render.
    #[must_use]
    pub fn tabs_config(&self) -> TabsConfig {
        TabsConfig {
            id: self.tabs.id.clone(),
            options: self.tabs.options.clone(),
            encode_labels: self.tabs.encode_labels,
            item_options: self.tabs.item_options.clone(),
            header_options: self.tabs.header_options.clone(),
            client_options: self.tabs.client_options.clone(),
            client_events: self.tabs.client_events.clone(),
        }
    }

    /// A fresh render context using the configured id prefix.
    #[must_use]
    pub fn render_context(&self) -> RenderContext {
        RenderContext::with_id_prefix(self.tabs.id_prefix.as_str())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_id_fragment(&self.tabs.id_prefix, "tabs.id_prefix")?;
        if let Some(id) = &self.tabs.id {
            require_id_fragment(id, "tabs.id")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.tabs.id_prefix = expand::expand_env(&self.tabs.id_prefix, "tabs.id_prefix")?;
        self.tabs.id = expand::expand_optional(self.tabs.id.as_deref(), "tabs.id")?;
        Ok(())
    }
}
