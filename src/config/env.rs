//! Environment snapshots and `.env` loading.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of the first `.env` lookup; later calls observe the same outcome.
static ENV_FILE: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Load `KEY=VALUE` assignments from a `.env` file in the working directory
/// or one of its ancestors into the process environment.
///
/// Runs at most once per process; subsequent calls return the path found by
/// the first call. Variables already present in the environment are left
/// untouched. A missing file is not an error, and a malformed one is logged
/// and skipped.
pub fn load_env_file() -> Option<&'static Path> {
    ENV_FILE
        .get_or_init(|| match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded environment file");
                Some(path)
            }
            Err(e) if e.not_found() => None,
            Err(e) => {
                warn!("ignoring unreadable environment file: {}", e);
                None
            }
        })
        .as_deref()
}

/// Load a specific env file into the process environment.
///
/// Unlike [`load_env_file`] this is not memoized and a missing file is an
/// error.
pub fn load_env_file_from(path: impl AsRef<Path>) -> crate::Result<()> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|e| {
        crate::Error::configuration_with_context(
            format!("failed to load environment file: {}", e),
            crate::ErrorContext::new()
                .with_field_path(path.display().to_string())
                .with_source("config"),
        )
    })?;
    debug!(path = %path.display(), "loaded environment file");
    Ok(())
}

/// Immutable view over environment variables.
///
/// Resolution code reads from a view instead of the process environment, so
/// applications decide when the environment is captured and tests can build
/// one by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvView {
    vars: HashMap<String, String>,
}

impl EnvView {
    /// An empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Run [`load_env_file`] and then snapshot the process environment.
    pub fn load() -> Self {
        load_env_file();
        Self::from_process()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Like [`EnvView::get`] but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvView
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
