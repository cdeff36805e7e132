//! HTTP transport for the ElevenLabs REST API.

mod http;

pub use http::{HttpTransport, TransportError, API_KEY_HEADER};
