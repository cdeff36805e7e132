//! ElevenLabs client handles and the cache that shares them.
//!
//! Keep the public surface small: build a handle with
//! [`ElevenLabsClient::builder`], or let a [`ClientCache`] resolve the key
//! and hand out shared handles.

pub mod builder;
pub mod cache;
pub mod catalog;
pub mod core;

pub use builder::ElevenLabsClientBuilder;
pub use cache::{default_cache, get_client, ClientCache};
pub use catalog::{list_models, list_voices};
pub use self::core::ElevenLabsClient;
