//! TTS (Text-to-Speech) types.

use crate::{BoxStream, Result};
use bytes::{Bytes, BytesMut};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Audio returned by a synthesis call.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Bytes,
    pub format: AudioFormat,
    /// The `output_format` the audio was requested with (e.g. `mp3_44100_128`).
    pub output_format: String,
}

/// Audio delivered incrementally by the streaming endpoint.
pub struct AudioStream {
    pub chunks: BoxStream<'static, Bytes>,
    pub format: AudioFormat,
    pub output_format: String,
}

impl AudioStream {
    /// Drain the stream into a single clip.
    pub async fn collect(mut self) -> Result<AudioOutput> {
        let mut data = BytesMut::new();
        while let Some(chunk) = self.chunks.try_next().await? {
            data.extend_from_slice(&chunk);
        }
        Ok(AudioOutput {
            data: data.freeze(),
            format: self.format,
            output_format: self.output_format,
        })
    }
}

impl AudioStream {
    /// Write the chunks to `path` as they arrive, returning the byte count.
    ///
    /// File errors surface as [`crate::Error::Io`].
    pub async fn write_to(mut self, path: impl AsRef<Path>) -> Result<u64> {
        let mut file = tokio::fs::File::create(path.as_ref()).await?;
        let mut written = 0u64;
        while let Some(chunk) = self.chunks.try_next().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok(written)
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("format", &self.format)
            .field("output_format", &self.output_format)
            .finish_non_exhaustive()
    }
}

/// Container/codec family of an ElevenLabs `output_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Opus,
    Pcm,
    Ulaw,
    Alaw,
    Wav,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/opus",
            Self::Pcm => "audio/pcm",
            Self::Ulaw => "audio/basic",
            Self::Alaw => "audio/x-alaw-basic",
            Self::Wav => "audio/wav",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Pcm => "pcm",
            Self::Ulaw => "ulaw",
            Self::Alaw => "alaw",
            Self::Wav => "wav",
        }
    }

    /// Infer the family from an `output_format` such as `pcm_16000`;
    /// unknown prefixes fall back to MP3.
    pub fn from_output_format(s: &str) -> Self {
        let prefix = s.split('_').next().unwrap_or_default();
        match prefix.to_ascii_lowercase().as_str() {
            "opus" => Self::Opus,
            "pcm" => Self::Pcm,
            "ulaw" => Self::Ulaw,
            "alaw" => Self::Alaw,
            "wav" => Self::Wav,
            _ => Self::Mp3,
        }
    }
}

/// Per-request voice tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

/// Options for TTS synthesis.
#[derive(Debug, Clone, Default)]
pub struct TtsOptions {
    pub model_id: Option<String>,
    pub output_format: Option<String>,
    pub voice_settings: Option<VoiceSettings>,
}

impl TtsOptions {
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    pub fn with_voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }
}
