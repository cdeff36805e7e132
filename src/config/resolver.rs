//! API key resolution.

use super::EnvView;
use crate::{Error, ErrorContext, Result};

/// Environment variable holding the ElevenLabs API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Resolve the API key to use.
///
/// A non-empty `explicit` value always wins; otherwise the non-empty
/// [`API_KEY_ENV`] entry of `env` is used. When neither yields a value the
/// returned configuration error names both options.
pub fn resolve_api_key(explicit: Option<&str>, env: &EnvView) -> Result<String> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    env.get_non_empty(API_KEY_ENV)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::configuration_with_context(
                format!(
                    "ElevenLabs API key is not configured. Set the {} environment variable or pass api_key explicitly.",
                    API_KEY_ENV
                ),
                ErrorContext::new()
                    .with_field_path(API_KEY_ENV)
                    .with_source("config"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins_over_env() {
        let env = EnvView::new().with_var(API_KEY_ENV, "from-env");
        assert_eq!(resolve_api_key(Some("explicit"), &env).unwrap(), "explicit");
        assert_eq!(
            resolve_api_key(Some("explicit"), &EnvView::new()).unwrap(),
            "explicit"
        );
    }

    #[test]
    fn test_env_key_used_without_override() {
        let env = EnvView::new().with_var(API_KEY_ENV, "k");
        assert_eq!(resolve_api_key(None, &env).unwrap(), "k");
    }

    #[test]
    fn test_empty_override_falls_back_to_env() {
        let env = EnvView::new().with_var(API_KEY_ENV, "k");
        assert_eq!(resolve_api_key(Some(""), &env).unwrap(), "k");
    }

    #[test]
    fn test_missing_key_names_env_var_and_override() {
        let err = resolve_api_key(None, &EnvView::new()).unwrap_err();
        assert!(err.is_configuration());
        let text = err.to_string();
        assert!(text.contains("ELEVENLABS_API_KEY"));
        assert!(text.contains("api_key"));
    }

    #[test]
    fn test_empty_env_value_is_missing() {
        let env = EnvView::new().with_var(API_KEY_ENV, "");
        assert!(resolve_api_key(Some(""), &env).unwrap_err().is_configuration());
    }
}
