//! `tabkit check` command implementation.

use std::path::PathBuf;

use clap::Args;
use tabkit::{TabItem, Tabs};
use tabkit_config::Config;

use crate::document::load_items;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Tab description file (YAML, or JSON with a `.json` extension).
    file: PathBuf,

    /// Path to configuration file (default: auto-discover tabkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Counts reported by a successful check.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CheckSummary {
    pub tabs: usize,
    pub dropdowns: usize,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found in the file.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let items = load_items(&self.file)?;
        let summary = check_items(items, &config)?;

        output.info(&self.file.display().to_string());
        output.success(&format!(
            "OK: {} tabs ({} dropdowns)",
            summary.tabs, summary.dropdowns
        ));
        Ok(())
    }
}

/// Render into a scratch context to surface configuration errors.
pub(crate) fn check_items(items: Vec<TabItem>, config: &Config) -> Result<CheckSummary, CliError> {
    let summary = CheckSummary {
        tabs: items.len(),
        dropdowns: items.iter().filter(|item| item.items.is_some()).count(),
    };

    let mut ctx = config.render_context();
    Tabs::new(items)
        .with_config(config.tabs_config())
        .render(&mut ctx)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use tabkit::{DropdownItem, TabsError};

    use super::*;

    #[test]
    fn test_check_valid_items() {
        let items = vec![
            TabItem::pane("One", "A"),
            TabItem::dropdown("More", vec![DropdownItem::pane("X", "x").into()]),
        ];
        let summary = check_items(items, &Config::default()).unwrap();
        assert_eq!(summary, CheckSummary { tabs: 2, dropdowns: 1 });
    }

    #[test]
    fn test_check_reports_dropdown_error() {
        let items = vec![TabItem::dropdown("More", vec![DropdownItem::new("X").into()])];
        let err = check_items(items, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Render(TabsError::MissingDropdownContent { index: 0 })
        ));
    }
}
