//! `${VAR}` and `${VAR:-default}` references in id settings.
//!
//! Only the braced form is recognized. Values without `${` are returned as
//! written, so a bare `$` (as in jQuery handlers) never triggers a lookup.

use std::env::VarError;

use crate::ConfigError;

/// Expand environment references in `value`, naming `field` on failure.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| std::env::var(var).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| {
            let reason = match e.cause {
                VarError::NotPresent => "not set",
                VarError::NotUnicode(_) => "is not valid unicode",
            };
            ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} {reason}", e.var_name),
            }
        })
}

/// [`expand_env`] for settings that may be absent.
pub(crate) fn expand_optional(
    value: Option<&str>,
    field: &str,
) -> Result<Option<String>, ConfigError> {
    value.map(|value| expand_env(value, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("TABKIT_TEST_UNSET");
        }
        let result = expand_env("${TABKIT_TEST_UNSET:-nav}", "tabs.id").unwrap();
        assert_eq!(result, "nav");
    }

    #[test]
    fn test_reference_inside_id() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TABKIT_TEST_PAGE", "settings");
        }
        let result = expand_env("${TABKIT_TEST_PAGE}-tabs", "tabs.id").unwrap();
        assert_eq!(result, "settings-tabs");
        unsafe {
            std::env::remove_var("TABKIT_TEST_PAGE");
        }
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("TABKIT_TEST_MISSING");
        }
        let err = expand_env("${TABKIT_TEST_MISSING}", "tabs.id").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("${TABKIT_TEST_MISSING} not set"));
        assert!(err.to_string().contains("tabs.id"));
    }

    #[test]
    fn test_jquery_handler_not_expanded() {
        let handler = "function (e) { $(e.target).addClass('seen'); }";
        assert_eq!(expand_env(handler, "tabs.client_events").unwrap(), handler);
    }

    #[test]
    fn test_optional_absent_stays_absent() {
        assert_eq!(expand_optional(None, "tabs.id").unwrap(), None);
        assert_eq!(
            expand_optional(Some("plain"), "tabs.id").unwrap().as_deref(),
            Some("plain")
        );
    }
}
