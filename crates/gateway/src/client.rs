//! HTTP client for the chat-completions gateway.
//!
//! Submits one of the prompt pairs from [`prompts`](crate::prompts) and
//! turns the reply into [`Recommendation`]s via
//! [`parse`](crate::parse). Uses [`reqwest`].

use serde::Deserialize;

use crate::parse::{extract_recommendations, Recommendation};
use crate::prompts::{build_prompts, RecommendationKind};

/// Default gateway base URL.
const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev";

/// Default model routed through the gateway.
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Configuration for the recommendation gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL, without the `/v1/chat/completions` suffix.
    pub base_url: String,
    /// Bearer token for the gateway.
    pub api_key: String,
    /// Model identifier passed through in each request.
    pub model: String,
}

impl GatewayConfig {
    /// Load gateway configuration from environment variables.
    ///
    /// | Env Var              | Required | Default                          |
    /// |----------------------|----------|----------------------------------|
    /// | `AI_GATEWAY_API_KEY` | **yes**  | --                               |
    /// | `AI_GATEWAY_URL`     | no       | `https://ai.gateway.lovable.dev` |
    /// | `AI_GATEWAY_MODEL`   | no       | `google/gemini-2.5-flash`        |
    ///
    /// # Panics
    ///
    /// Panics if `AI_GATEWAY_API_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let api_key = std::env::var("AI_GATEWAY_API_KEY")
            .expect("AI_GATEWAY_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "AI_GATEWAY_API_KEY must not be empty");

        let base_url =
            std::env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.into());
        let model = std::env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Self {
            base_url,
            api_key,
            model,
        }
    }
}

/// Errors from the recommendation gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway rejected the request with HTTP 429.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The gateway rejected the request with HTTP 402.
    #[error("AI credits exhausted. Please add credits to continue.")]
    CreditsExhausted,

    /// Any other non-2xx reply.
    #[error("AI gateway error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx reply whose body did not contain a message.
    #[error("AI gateway returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Client for the recommendation gateway.
pub struct RecommendationGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl RecommendationGateway {
    /// Create a new gateway client.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a gateway client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// Request recommendations of the given kind for the given context.
    ///
    /// Builds the prompt pair, posts it to `/v1/chat/completions`, and
    /// parses the reply. 429 and 402 map to their dedicated variants;
    /// the caller decides how to present them.
    pub async fn recommendations(
        &self,
        kind: RecommendationKind,
        context: &serde_json::Value,
    ) -> Result<Vec<Recommendation>, GatewayError> {
        let (system, user) = build_prompts(kind, context);

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "temperature": 0.7,
            "max_tokens": 1000,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                429 => GatewayError::RateLimited,
                402 => GatewayError::CreditsExhausted,
                code => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<unreadable body>".to_string());
                    tracing::error!(status = code, body = %body, "AI gateway error");
                    GatewayError::Api { status: code, body }
                }
            });
        }

        let reply = response.json::<ChatCompletionResponse>().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GatewayError::EmptyReply)?;

        Ok(extract_recommendations(&content))
    }
}
