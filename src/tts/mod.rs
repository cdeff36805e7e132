//! TTS（文字转语音）模块：调用 ElevenLabs text-to-speech 接口合成音频。

mod client;
mod types;

pub use client::{DEFAULT_MODEL_ID, DEFAULT_OUTPUT_FORMAT};
pub use types::{AudioFormat, AudioOutput, AudioStream, TtsOptions, VoiceSettings};
