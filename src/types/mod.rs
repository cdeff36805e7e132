//! 类型模块：ElevenLabs 接口返回的模型与音色描述。
//!
//! # Types Module
//!
//! Statically typed views over the catalog payloads returned by the
//! ElevenLabs API. Every field the service documents is an `Option`, so a
//! response that omits one still decodes; fields this crate does not know
//! about are kept in an `extra` map instead of being dropped.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ModelDescriptor`] | One synthesis model (`GET /v1/models`) |
//! | [`VoiceDescriptor`] | One voice (`GET /v1/voices`) |

pub mod model;
pub mod voice;

pub use model::{Language, ModelDescriptor, ModelRates};
pub use voice::{VoiceDescriptor, VoicesResponse};
