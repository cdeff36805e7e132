//! 配置解析：API Key 与传输参数的来源。
//!
//! # Configuration
//!
//! Everything the crate needs from its surroundings flows through an
//! [`EnvView`]: an immutable snapshot of `KEY=VALUE` pairs. The process
//! environment (optionally populated from a `.env` file) is only read when a
//! view is built, so key resolution stays a pure function of its inputs.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ELEVENLABS_API_KEY` | API secret | required |
//! | `ELEVENLABS_BASE_URL` | API root | `https://api.elevenlabs.io` |
//! | `ELEVENLABS_TIMEOUT_SECS` | Request timeout in seconds | `60` |
//! | `ELEVENLABS_PROXY_URL` | HTTP(S) proxy | none |
//!
//! ```rust
//! use elevenlabs_kit::config::{resolve_api_key, EnvView};
//!
//! let env = EnvView::new().with_var("ELEVENLABS_API_KEY", "sk-from-env");
//! assert_eq!(resolve_api_key(None, &env).unwrap(), "sk-from-env");
//! assert_eq!(resolve_api_key(Some("sk-explicit"), &env).unwrap(), "sk-explicit");
//! ```

mod env;
mod resolver;
mod settings;

pub use env::{load_env_file, load_env_file_from, EnvView};
pub use resolver::{resolve_api_key, API_KEY_ENV};
pub use settings::{
    ClientSettings, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PROXY_URL_ENV,
    TIMEOUT_ENV,
};

pub(crate) use settings::normalize_base_url;
