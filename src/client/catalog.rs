//! Read-only catalog queries: models and voices.

use crate::client::cache::get_client;
use crate::client::core::ElevenLabsClient;
use crate::types::{ModelDescriptor, VoiceDescriptor, VoicesResponse};
use crate::Result;
use tracing::info;

const MODELS_PATH: &[&str] = &["v1", "models"];
const VOICES_PATH: &[&str] = &["v1", "voices"];

impl ElevenLabsClient {
    /// List the models visible to the authenticated account, in the order
    /// the service returns them.
    pub async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let models: Vec<ModelDescriptor> = self.transport.get_json(MODELS_PATH).await?;
        info!(count = models.len(), "listed ElevenLabs models");
        Ok(models)
    }

    /// List the voices available to the account.
    pub async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>> {
        let response: VoicesResponse = self.transport.get_json(VOICES_PATH).await?;
        info!(count = response.voices.len(), "listed ElevenLabs voices");
        Ok(response.voices)
    }

    /// Find a voice by id or (case-insensitive) name.
    pub async fn find_voice(&self, query: &str) -> Result<Option<VoiceDescriptor>> {
        Ok(self
            .list_voices()
            .await?
            .into_iter()
            .find(|voice| voice.matches(query)))
    }
}

/// List models with `client`, or with the shared default client when `None`.
pub async fn list_models(client: Option<&ElevenLabsClient>) -> Result<Vec<ModelDescriptor>> {
    match client {
        Some(client) => client.list_models().await,
        None => {
            let shared = get_client(None)?;
            shared.list_models().await
        }
    }
}

/// List voices with `client`, or with the shared default client when `None`.
pub async fn list_voices(client: Option<&ElevenLabsClient>) -> Result<Vec<VoiceDescriptor>> {
    match client {
        Some(client) => client.list_voices().await,
        None => {
            let shared = get_client(None)?;
            shared.list_voices().await
        }
    }
}
