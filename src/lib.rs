//! # elevenlabs-kit
//!
//! 面向 ElevenLabs 文字转语音 API 的轻量封装：解析 API Key、复用客户端、查询模型列表。
//!
//! A thin convenience layer over the ElevenLabs text-to-speech API: resolve the
//! API key, share memoized client handles, and query the account's catalog.
//!
//! ## Overview
//!
//! - **Configuration**: the key comes from an explicit override or from the
//!   `ELEVENLABS_API_KEY` entry of an [`EnvView`] (optionally populated from a
//!   `.env` file once per process)
//! - **Client cache**: [`ClientCache`] builds at most one [`ElevenLabsClient`]
//!   per distinct override; no override is its own, shared slot
//! - **Catalog**: [`list_models`] and [`list_voices`] return typed descriptors
//!   in service order
//! - **Speech**: [`ElevenLabsClient::text_to_speech`] returns encoded audio,
//!   [`ElevenLabsClient::text_to_speech_stream`] yields it chunk by chunk
//!
//! Failures from the service are surfaced as they are; nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_kit::{get_client, list_models};
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_kit::Result<()> {
//!     // Reads ELEVENLABS_API_KEY (from the environment or a .env file)
//!     let client = get_client(None)?;
//!
//!     for model in list_models(Some(&client)).await? {
//!         println!("{}", model.display_id());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Explicit configuration
//!
//! ```rust
//! use elevenlabs_kit::{ClientCache, EnvView};
//! use std::sync::Arc;
//!
//! let env = EnvView::new().with_var("ELEVENLABS_API_KEY", "sk-test");
//! let cache = ClientCache::new();
//! let a = cache.get_client(None, &env).unwrap();
//! let b = cache.get_client(None, &env).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Environment views, `.env` loading, key and settings resolution |
//! | [`client`] | Client handles, builder, cache and catalog queries |
//! | [`types`] | Model and voice descriptors |
//! | [`tts`] | Speech synthesis options and audio output |
//! | [`transport`] | Authenticated HTTP plumbing |

pub mod client;
pub mod config;
pub mod transport;
pub mod tts;
pub mod types;

// Re-export main types for convenience
pub use client::{
    default_cache, get_client, list_models, list_voices, ClientCache, ElevenLabsClient,
    ElevenLabsClientBuilder,
};
pub use config::{load_env_file, resolve_api_key, ClientSettings, EnvView, API_KEY_ENV};
pub use tts::{AudioFormat, AudioOutput, AudioStream, TtsOptions, VoiceSettings};
pub use types::{ModelDescriptor, VoiceDescriptor};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
