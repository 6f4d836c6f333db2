//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Request bodies carry the prompt as text parts, with the rulebook (when
//! present) as a leading base64 `inlineData` part so the model reads the
//! document before the instructions. Field names are camelCase on the wire.

use base64::{engine::general_purpose::STANDARD, Engine};
use rulemaster_domain::Rulebook;
use serde::{Deserialize, Serialize};

/// One part of a content block: either text or inline binary data
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: &[u8]) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: STANDARD.encode(data),
            }),
            ..Default::default()
        }
    }
}

/// Base64-encoded binary payload with its MIME type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request: optional rulebook first, then the prompt
    pub fn new(prompt: &str, rulebook: Option<&Rulebook>) -> Self {
        let mut parts = Vec::with_capacity(2);
        if let Some(rulebook) = rulebook {
            parts.push(Part::inline_data(rulebook.mime_type(), rulebook.data()));
        }
        parts.push(Part::text(prompt));

        Self {
            contents: vec![Content { parts }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response body for `models/{model}:generateContent`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// `None` when the response carries no usable text (no candidates,
    /// empty content, or parts without text).
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}
