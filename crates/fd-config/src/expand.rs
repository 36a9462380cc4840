//! `${VAR}` and `${VAR:-fallback}` expansion in config values.

use std::borrow::Cow;

use crate::ConfigError;

/// Variable referenced without a fallback and not set.
struct MissingVar(String);

/// Expand variable references in `value`, naming `field` on failure.
///
/// Values without `${` are returned as is, so a bare `$` never expands.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| MissingVar(name.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FD_TEST_VAR_SIMPLE", "hello");
        }
        let result = expand_env("${FD_TEST_VAR_SIMPLE}", "site.title").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("FD_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FD_UNSET_VAR_TEST");
        }
        let result = expand_env("${FD_UNSET_VAR_TEST:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FD_MISSING_VAR_TEST");
        }
        let err = expand_env("${FD_MISSING_VAR_TEST}", "server.host").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FD_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FD_PRODUCT_TEST", "Fern");
        }
        let result = expand_env("${FD_PRODUCT_TEST} Documentation", "site.title").unwrap();
        assert_eq!(result, "Fern Documentation");
        unsafe {
            std::env::remove_var("FD_PRODUCT_TEST");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("costs $5", "site.title").unwrap();
        assert_eq!(result, "costs $5");
    }
}
