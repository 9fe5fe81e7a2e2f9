//! PredictionClient -- concrete [`ConversationClient`] over HTTP.
//!
//! Sends one POST per query to the configured prediction endpoint and maps
//! every failure -- transport, non-success status, malformed payload --
//! into the fixed fallback reply. Nothing escapes this boundary as an
//! error, and nothing is ever retried.

use tracing::{debug, warn};

use confab_core::remote::client::ConversationClient;
use confab_types::remote::{
    AssistantReply, FALLBACK_REPLY, OverrideConfig, PredictionRequest, PredictionResponse,
    RemoteError,
};

/// HTTP client for the prediction endpoint.
pub struct PredictionClient {
    client: reqwest::Client,
    endpoint_url: String,
}

impl PredictionClient {
    /// Create a client for the given endpoint URL.
    ///
    /// No request timeout is configured: the protocol has no idempotency
    /// key, each send makes exactly one attempt, and the transport's own
    /// defaults govern how long that attempt may take.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }

    /// The endpoint this client posts to.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Issue the single network attempt for a query.
    async fn try_query(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|err| RemoteError::Deserialization(err.to_string()))
    }
}

impl ConversationClient for PredictionClient {
    async fn query(
        &self,
        question: &str,
        chat_id: Option<&str>,
        session_id: &str,
    ) -> AssistantReply {
        let request = PredictionRequest {
            question: question.to_string(),
            chat_id: chat_id.map(str::to_string),
            override_config: OverrideConfig {
                session_id: session_id.to_string(),
            },
        };

        match self.try_query(&request).await {
            Ok(response) => {
                debug!(
                    chat_id = %response.chat_id,
                    chat_message_id = %response.chat_message_id,
                    "prediction reply received"
                );
                AssistantReply {
                    text: response.text,
                    chat_id: response.chat_id,
                    session_id: response.session_id,
                    chat_message_id: response.chat_message_id,
                }
            }
            Err(err) => {
                warn!(error = %err, "prediction request failed, synthesizing fallback reply");
                AssistantReply {
                    text: FALLBACK_REPLY.to_string(),
                    chat_id: chat_id.unwrap_or_default().to_string(),
                    session_id: session_id.to_string(),
                    chat_message_id: String::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    /// Serve the given router on an ephemeral port, returning the endpoint
    /// URL.
    async fn spawn_endpoint(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api/v1/prediction/test")
    }

    fn canned_response() -> serde_json::Value {
        serde_json::json!({
            "text": "Sure, happy to help.",
            "question": "Can you help me with my account settings?",
            "chatId": "c1",
            "chatMessageId": "m1",
            "isStreamValid": false,
            "sessionId": "s1",
            "memoryType": "buffer"
        })
    }

    #[tokio::test]
    async fn success_path_extracts_the_four_fields() {
        let seen = Arc::new(Mutex::new(None::<serde_json::Value>));
        let seen_in_handler = Arc::clone(&seen);
        let router = Router::new().route(
            "/api/v1/prediction/test",
            post(move |Json(body): Json<serde_json::Value>| {
                let seen = Arc::clone(&seen_in_handler);
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(canned_response())
                }
            }),
        );
        let url = spawn_endpoint(router).await;

        let client = PredictionClient::new(&url);
        let reply = client
            .query("Can you help me with my account settings?", None, "local")
            .await;

        assert_eq!(reply.text, "Sure, happy to help.");
        assert_eq!(reply.chat_id, "c1");
        assert_eq!(reply.session_id, "s1");
        assert_eq!(reply.chat_message_id, "m1");

        // The outbound body omits chatId and nests the session identifier.
        let body = seen.lock().unwrap().clone().unwrap();
        assert_eq!(
            body["question"],
            "Can you help me with my account settings?"
        );
        assert!(body.get("chatId").is_none());
        assert_eq!(body["overrideConfig"]["sessionId"], "local");
    }

    #[tokio::test]
    async fn known_chat_id_is_transmitted() {
        let seen = Arc::new(Mutex::new(None::<serde_json::Value>));
        let seen_in_handler = Arc::clone(&seen);
        let router = Router::new().route(
            "/api/v1/prediction/test",
            post(move |Json(body): Json<serde_json::Value>| {
                let seen = Arc::clone(&seen_in_handler);
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(canned_response())
                }
            }),
        );
        let url = spawn_endpoint(router).await;

        let client = PredictionClient::new(&url);
        client.query("follow-up", Some("c1"), "s1").await;

        let body = seen.lock().unwrap().clone().unwrap();
        assert_eq!(body["chatId"], "c1");
    }

    #[tokio::test]
    async fn non_success_status_yields_fallback() {
        let router = Router::new().route(
            "/api/v1/prediction/test",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = spawn_endpoint(router).await;

        let client = PredictionClient::new(&url);
        let reply = client.query("hello", Some("c1"), "s1").await;

        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.chat_id, "c1");
        assert_eq!(reply.session_id, "s1");
        assert!(reply.chat_message_id.is_empty());
    }

    #[tokio::test]
    async fn malformed_payload_yields_fallback() {
        let router = Router::new().route(
            "/api/v1/prediction/test",
            post(|| async { "definitely not json" }),
        );
        let url = spawn_endpoint(router).await;

        let client = PredictionClient::new(&url);
        let reply = client.query("hello", None, "s1").await;

        assert_eq!(reply.text, FALLBACK_REPLY);
        // No chat id to echo -- the field is empty, not absent.
        assert_eq!(reply.chat_id, "");
        assert_eq!(reply.session_id, "s1");
    }

    #[tokio::test]
    async fn full_turn_persists_and_resumes_across_instances() {
        use crate::filesystem::snapshot::JsonSnapshotStore;
        use confab_core::chat::manager::ChatSessionManager;
        use tempfile::TempDir;

        let seen = Arc::new(Mutex::new(Vec::<serde_json::Value>::new()));
        let seen_in_handler = Arc::clone(&seen);
        let router = Router::new().route(
            "/api/v1/prediction/test",
            post(move |Json(body): Json<serde_json::Value>| {
                let seen = Arc::clone(&seen_in_handler);
                async move {
                    seen.lock().unwrap().push(body);
                    Json(canned_response())
                }
            }),
        );
        let url = spawn_endpoint(router).await;
        let tmp = TempDir::new().unwrap();

        {
            let manager = ChatSessionManager::new(
                JsonSnapshotStore::new(tmp.path()),
                PredictionClient::new(&url),
            );
            manager.initialize().await;
            manager.send("first question", None).await;
            assert_eq!(manager.chat_id().await.as_deref(), Some("c1"));
        }

        // A brand-new manager over the same directory resumes the
        // conversation and its thread identity.
        let manager = ChatSessionManager::new(
            JsonSnapshotStore::new(tmp.path()),
            PredictionClient::new(&url),
        );
        manager.initialize().await;
        assert_eq!(manager.chat_id().await.as_deref(), Some("c1"));
        assert_eq!(manager.session_id().await, "s1");
        assert_eq!(manager.messages().await.len(), 3); // welcome, user, reply

        manager.send("second question", None).await;

        let bodies = seen.lock().unwrap().clone();
        assert_eq!(bodies.len(), 2);
        assert!(bodies[0].get("chatId").is_none());
        assert_eq!(bodies[1]["chatId"], "c1");
        assert_eq!(bodies[1]["overrideConfig"]["sessionId"], "s1");
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_fallback() {
        // Bind then drop a listener so the port is known to refuse.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PredictionClient::new(format!("http://{addr}/api/v1/prediction/test"));
        let reply = client.query("hello", None, "s1").await;

        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.session_id, "s1");
    }
}
