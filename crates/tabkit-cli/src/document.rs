//! Tab description files.

use std::path::Path;

use tabkit::TabItem;

use crate::error::CliError;

/// Read a list of tab items from a YAML or JSON file.
///
/// `.json` files are parsed as JSON; everything else as YAML.
pub(crate) fn load_items(path: &Path) -> Result<Vec<TabItem>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_items(&content, is_json)
}

/// Parse a list of tab items.
pub(crate) fn parse_items(content: &str, is_json: bool) -> Result<Vec<TabItem>, CliError> {
    let items: Vec<TabItem> = if is_json {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };
    tracing::debug!(count = items.len(), "Loaded tab description");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let items = parse_items("- label: One\n  content: A\n", false).unwrap();
        assert_eq!(items, vec![TabItem::pane("One", "A")]);
    }

    #[test]
    fn test_parse_json() {
        let items = parse_items(
            r#"[{"label": "One", "content": "A", "active": true}]"#,
            true,
        )
        .unwrap();
        assert_eq!(items, vec![TabItem::pane("One", "A").active()]);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_items("label: [", false).unwrap_err();
        assert!(matches!(err, CliError::Yaml(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabs.JSON");
        std::fs::write(&path, r#"[{"label": "One", "content": "A"}]"#).unwrap();

        let items = load_items(&path).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_items(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
