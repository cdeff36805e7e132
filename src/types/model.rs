//! Synthesis model descriptors.

use serde::{Deserialize, Serialize};

/// A model as listed by `GET /v1/models`.
///
/// Serializing a descriptor reproduces every field the service sent:
/// documented fields come from the typed members (absent ones as `null`),
/// anything else from [`ModelDescriptor::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub model_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub can_be_finetuned: Option<bool>,
    pub can_do_text_to_speech: Option<bool>,
    pub can_do_voice_conversion: Option<bool>,
    pub can_use_style: Option<bool>,
    pub can_use_speaker_boost: Option<bool>,
    pub serves_pro_voices: Option<bool>,
    pub token_cost_factor: Option<f64>,
    pub requires_alpha_access: Option<bool>,
    pub max_characters_request_free_user: Option<u64>,
    pub max_characters_request_subscribed_user: Option<u64>,
    pub maximum_text_length_per_request: Option<u64>,
    pub languages: Option<Vec<Language>>,
    pub model_rates: Option<ModelRates>,
    pub concurrency_group: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language_id: Option<String>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRates {
    pub character_cost_multiplier: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ModelDescriptor {
    /// Plain field-name to value mapping of this descriptor.
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            // A struct with string keys always serializes to an object.
            _ => serde_json::Map::new(),
        }
    }

    /// The model id, or `"-"` when the service omitted it.
    pub fn display_id(&self) -> &str {
        self.model_id.as_deref().unwrap_or("-")
    }

    pub fn supports_text_to_speech(&self) -> bool {
        self.can_do_text_to_speech.unwrap_or(false)
    }

    /// Language ids the model advertises, in service order.
    pub fn language_ids(&self) -> Vec<&str> {
        self.languages
            .iter()
            .flatten()
            .filter_map(|l| l.language_id.as_deref())
            .collect()
    }
}
