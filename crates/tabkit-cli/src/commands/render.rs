//! `tabkit render` command implementation.

use std::path::PathBuf;

use clap::Args;
use tabkit::{TabItem, Tabs};
use tabkit_config::{CliSettings, Config};

use crate::document::load_items;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Tab description file (YAML, or JSON with a `.json` extension).
    file: PathBuf,

    /// Path to configuration file (default: auto-discover tabkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Widget container id (overrides config).
    #[arg(long)]
    id: Option<String>,

    /// Emit labels without HTML escaping.
    #[arg(long)]
    no_encode_labels: bool,

    /// Omit the client script block.
    #[arg(long)]
    no_scripts: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, parsing, or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            encode_labels: self.no_encode_labels.then_some(false),
            id: self.id,
            include_scripts: self.no_scripts.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration file");
        }

        let items = load_items(&self.file)?;
        let html = render_document(items, &config)?;
        output.markup(&html)?;

        Ok(())
    }
}

/// Render tab items with the configured widget defaults.
///
/// Appends the client script block when `output.include_scripts` is set and
/// any plugin was registered.
pub(crate) fn render_document(items: Vec<TabItem>, config: &Config) -> Result<String, CliError> {
    let mut ctx = config.render_context();
    let mut html = Tabs::new(items)
        .with_config(config.tabs_config())
        .render(&mut ctx)?;

    if config.output.include_scripts
        && let Some(script) = ctx.script_block()
    {
        html.push('\n');
        html.push_str(&script);
    }

    Ok(html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tabkit::TabsError;

    use super::*;

    #[test]
    fn test_render_with_scripts() {
        let config = Config::default();
        let html = render_document(vec![TabItem::pane("One", "A")], &config).unwrap();

        assert_eq!(
            html,
            "<ul id=\"w0\" class=\"nav nav-tabs\"><li><a href=\"#w0-tab0\" data-toggle=\"tab\">One</a></li></ul>\n\
             <div class=\"tab-content\"><div id=\"w0-tab0\" class=\"tab-pane\">A</div></div>\n\
             <script>jQuery(function ($) {\njQuery('#w0').tab();\n});</script>"
        );
    }

    #[test]
    fn test_render_without_scripts() {
        let mut config = Config::default();
        config.output.include_scripts = false;
        let html = render_document(vec![TabItem::pane("One", "A")], &config).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_uses_config_defaults() {
        let mut config = Config::default();
        config.tabs.id_prefix = "page".to_owned();
        config.tabs.encode_labels = false;
        let html = render_document(vec![TabItem::pane("<em>One</em>", "A")], &config).unwrap();

        assert!(html.contains(r#"<ul id="page0""#));
        assert!(html.contains("<em>One</em>"));
    }

    #[test]
    fn test_render_error_propagates() {
        let config = Config::default();
        let err = render_document(vec![TabItem::new("Empty")], &config).unwrap_err();
        assert!(matches!(
            err,
            CliError::Render(TabsError::MissingContent { index: 0, .. })
        ));
    }
}
