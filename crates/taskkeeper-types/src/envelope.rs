//! Platform request/response envelope types.
//!
//! These model the JSON the voice platform sends to the skill endpoint and
//! expects back. Field names on the wire are camelCase; the request body is
//! discriminated by its `type` tag. Unknown fields (timestamps, locale,
//! context blocks) are ignored on deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attributes::SessionAttributes;

/// Envelope version emitted in every response.
pub const ENVELOPE_VERSION: &str = "1.0";

/// An inbound request from the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    /// Absent for out-of-session deliveries; task intents require it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub request: Request,
}

fn default_version() -> String {
    ENVELOPE_VERSION.to_string()
}

impl RequestEnvelope {
    /// The session attributes carried on this request, or defaults when the
    /// envelope has no session block.
    pub fn session_attributes(&self) -> SessionAttributes {
        self.session
            .as_ref()
            .map(|s| s.attributes.clone())
            .unwrap_or_default()
    }

    /// The platform-supplied user id, if a session block is present.
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.user_id.as_str())
    }
}

/// The session block of an inbound request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default)]
    pub attributes: SessionAttributes,
    pub user: User,
}

/// The user block of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// The request body, discriminated by its `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "IntentRequest")]
    Intent { intent: IntentPayload },
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded {
        #[serde(default)]
        reason: Option<String>,
    },
}

/// The intent payload of an `IntentRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl IntentPayload {
    /// The value of a named slot, if present and filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|slot| slot.value.as_deref())
    }
}

/// A single slot of an intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// The outbound response envelope.
///
/// `session_attributes` are echoed back by the platform on the next turn of
/// the same session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: ResponseBody,
}

/// The response body: speech, optional reprompt, optional session close.
///
/// An omitted `should_end_session` leaves the session open on the platform
/// side; handlers that close the session set it explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Plain-text speech output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    /// Build a `PlainText` speech output.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

/// Reprompt spoken when the user stays silent after the main speech.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}
