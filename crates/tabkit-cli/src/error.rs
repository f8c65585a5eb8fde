//! CLI error types.

use tabkit::TabsError;
use tabkit_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] TabsError),

    #[error("Invalid tab description (YAML): {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid tab description (JSON): {0}")]
    Json(#[from] serde_json::Error),
}
