use super::MediaResolution;
use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One conversation turn: a role and its ordered parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            role: Some(role),
            parts,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![Part::text(text)])
    }
}

/// Base64 media payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
    #[serde(
        default,
        rename = "mediaResolution",
        skip_serializing_if = "Option::is_none"
    )]
    pub media_resolution: Option<MediaResolution>,
}

/// A single part of a turn or of a response candidate.
///
/// Parts the driver does not model (function calls, code execution, ...) are
/// kept as raw JSON in `Other` so a response carrying them still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
        /// Set by the service on reasoning-trace parts
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(serde_json::Value),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            thought: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
                media_resolution: None,
            },
        }
    }

    /// Text of a text-bearing part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// True for reasoning-trace parts (`thought: true`).
    pub fn is_thought(&self) -> bool {
        matches!(self, Self::Text { thought: Some(true), .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parts_serialize_to_wire_shape() {
        let turn = Content::new(
            Role::User,
            vec![Part::text("hi"), Part::inline_data("image/png", "AAAA")],
        );
        assert_eq!(
            serde_json::to_value(&turn).unwrap(),
            json!({
                "role": "user",
                "parts": [
                    {"text": "hi"},
                    {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
                ]
            })
        );
    }

    #[test]
    fn parts_deserialize_thoughts_and_unknown_shapes() {
        let parts: Vec<Part> = serde_json::from_value(json!([
            {"text": "plan", "thought": true},
            {"text": "answer"},
            {"functionCall": {"name": "f", "args": {}}}
        ]))
        .unwrap();
        assert!(parts[0].is_thought());
        assert!(!parts[1].is_thought());
        assert_eq!(parts[1].as_text(), Some("answer"));
        assert!(matches!(parts[2], Part::Other(_)));
        assert!(parts[2].as_text().is_none());
    }
}
