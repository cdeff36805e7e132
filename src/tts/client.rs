//! TTS (Text-to-Speech) requests.

use super::types::{AudioFormat, AudioOutput, AudioStream, TtsOptions};
use crate::client::ElevenLabsClient;
use crate::{Error, ErrorContext, Result};
use tracing::info;

pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";

/// A prepared synthesis call.
struct SpeechRequest<'a> {
    voice_id: &'a str,
    model_id: &'a str,
    output_format: &'a str,
    format: AudioFormat,
    body: serde_json::Value,
}

impl<'a> SpeechRequest<'a> {
    fn new(voice_id: &'a str, text: &str, options: &'a TtsOptions) -> Result<Self> {
        let voice_id = validate_voice_id(voice_id)?;
        if text.trim().is_empty() {
            return Err(Error::validation_with_context(
                "text is required",
                ErrorContext::new().with_field_path("text").with_source("tts"),
            ));
        }

        let model_id = options.model_id.as_deref().unwrap_or(DEFAULT_MODEL_ID);
        let output_format = options
            .output_format
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FORMAT);

        let mut body = serde_json::json!({
            "text": text,
            "model_id": model_id,
        });
        if let Some(settings) = &options.voice_settings {
            body["voice_settings"] = serde_json::to_value(settings)?;
        }

        Ok(Self {
            voice_id,
            model_id,
            output_format,
            format: AudioFormat::from_output_format(output_format),
            body,
        })
    }
}

/// Voice ids are opaque path segments; reject the ones that would change
/// which endpoint a request reaches.
fn validate_voice_id(voice_id: &str) -> Result<&str> {
    let voice_id = voice_id.trim();
    let problem = if voice_id.is_empty() {
        Some("voice id is required")
    } else if voice_id == "." || voice_id == ".." {
        Some("voice id cannot be a relative path segment")
    } else if voice_id
        .chars()
        .any(|c| matches!(c, '/' | '\\' | '?' | '#') || c.is_control())
    {
        Some("voice id contains reserved characters")
    } else {
        None
    };
    match problem {
        Some(message) => Err(Error::validation_with_context(
            message,
            ErrorContext::new()
                .with_field_path("voice_id")
                .with_details(format!("got {:?}", voice_id))
                .with_source("tts"),
        )),
        None => Ok(voice_id),
    }
}

impl ElevenLabsClient {
    /// Synthesize `text` with the voice `voice_id` and return the whole clip.
    ///
    /// Invalid ids and blank text are rejected before any request is sent.
    pub async fn text_to_speech(
        &self,
        voice_id: &str,
        text: &str,
        options: &TtsOptions,
    ) -> Result<AudioOutput> {
        let req = SpeechRequest::new(voice_id, text, options)?;
        let data = self
            .transport
            .post_for_bytes(
                &["v1", "text-to-speech", req.voice_id],
                &[("output_format", req.output_format)],
                &req.body,
                req.format.mime_type(),
            )
            .await?;
        info!(
            voice_id = req.voice_id,
            model_id = req.model_id,
            bytes = data.len(),
            "synthesized speech"
        );
        Ok(AudioOutput {
            data,
            format: req.format,
            output_format: req.output_format.to_string(),
        })
    }

    /// Synthesize `text` through the streaming endpoint, yielding audio
    /// chunks as the service produces them.
    ///
    /// A rejected request fails here; the returned stream only carries
    /// transport failures that happen mid-body.
    pub async fn text_to_speech_stream(
        &self,
        voice_id: &str,
        text: &str,
        options: &TtsOptions,
    ) -> Result<AudioStream> {
        let req = SpeechRequest::new(voice_id, text, options)?;
        let chunks = self
            .transport
            .post_for_stream(
                &["v1", "text-to-speech", req.voice_id, "stream"],
                &[("output_format", req.output_format)],
                &req.body,
                req.format.mime_type(),
            )
            .await?;
        info!(
            voice_id = req.voice_id,
            model_id = req.model_id,
            "streaming speech"
        );
        Ok(AudioStream {
            chunks,
            format: req.format,
            output_format: req.output_format.to_string(),
        })
    }
}
