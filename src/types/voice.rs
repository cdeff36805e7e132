//! Voice descriptors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Envelope of `GET /v1/voices`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoicesResponse {
    #[serde(default)]
    pub voices: Vec<VoiceDescriptor>,
}

/// A voice available to the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub voice_id: Option<String>,
    /// Some payloads carry the identifier as `id` instead of `voice_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub labels: Option<BTreeMap<String, String>>,
    pub preview_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VoiceDescriptor {
    /// The identifier to synthesize with: a non-empty `voice_id`, else a
    /// non-empty `id`.
    pub fn resolved_id(&self) -> Option<&str> {
        self.voice_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.id.as_deref().filter(|s| !s.is_empty()))
    }

    /// True when `query` equals the resolved id or, ignoring case, the name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.resolved_id() == Some(query) || self.name.eq_ignore_ascii_case(query)
    }
}
