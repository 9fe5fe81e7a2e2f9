//! Prediction endpoint wire types.
//!
//! The remote conversation service exposes a single JSON POST endpoint.
//! These types mirror its fixed request and response shapes; only the
//! fields named in [`AssistantReply`] are ever acted upon.

use serde::{Deserialize, Serialize};

/// Fixed reply text synthesized when the remote call fails in any way.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

/// Request body for the prediction endpoint.
///
/// `chat_id` is omitted entirely until the service has issued one;
/// `override_config.session_id` is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    pub override_config: OverrideConfig,
}

/// Per-request configuration override carrying the session identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideConfig {
    pub session_id: String,
}

/// Response body of the prediction endpoint.
///
/// The full shape is fixed by the service; everything except `text` is
/// tolerated as absent so a thin reply still parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub text: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub chat_id: String,
    #[serde(default)]
    pub chat_message_id: String,
    #[serde(default)]
    pub is_stream_valid: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub memory_type: String,
}

/// The distilled result of one remote query, successful or synthesized.
///
/// Every field is always present: a synthesized failure reply carries the
/// caller's `chat_id` (or empty), the caller's `session_id` unchanged, and
/// an empty `chat_message_id`, so the session manager's merge step never
/// sees a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
    pub chat_id: String,
    pub session_id: String,
    pub chat_message_id: String,
}

/// Errors from the prediction endpoint interaction.
///
/// These never escape the conversation client: each is collapsed into a
/// synthesized [`AssistantReply`] carrying [`FALLBACK_REPLY`].
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response payload: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_chat_id() {
        let request = PredictionRequest {
            question: "hello".to_string(),
            chat_id: None,
            override_config: OverrideConfig {
                session_id: "s1".to_string(),
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("chatId"));
        assert!(json.contains("\"overrideConfig\":{\"sessionId\":\"s1\"}"));
    }

    #[test]
    fn test_request_carries_chat_id_once_known() {
        let request = PredictionRequest {
            question: "hello".to_string(),
            chat_id: Some("c1".to_string()),
            override_config: OverrideConfig {
                session_id: "s1".to_string(),
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"chatId\":\"c1\""));
    }

    #[test]
    fn test_response_parses_full_shape() {
        let json = r#"{
            "text": "Sure, happy to help.",
            "question": "Can you help me?",
            "chatId": "c1",
            "chatMessageId": "m1",
            "isStreamValid": false,
            "sessionId": "s1",
            "memoryType": "buffer"
        }"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text, "Sure, happy to help.");
        assert_eq!(response.chat_id, "c1");
        assert_eq!(response.chat_message_id, "m1");
        assert_eq!(response.session_id, "s1");
    }

    #[test]
    fn test_response_tolerates_thin_payload() {
        let response: PredictionResponse = serde_json::from_str(r#"{"text": "ok"}"#).unwrap();
        assert_eq!(response.text, "ok");
        assert!(response.chat_id.is_empty());
        assert!(response.session_id.is_empty());
    }

    #[test]
    fn test_response_requires_text() {
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"chatId": "c1"}"#).is_err());
    }

    #[test]
    fn test_remote_error_display() {
        let err = RemoteError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
    }
}
