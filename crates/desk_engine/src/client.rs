use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::{GenerationResult, PromptPair, UpstreamError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl PromptPair {
    /// Message list in the order the endpoint expects: system first.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: Role::System,
                content: self.system.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: self.user.clone(),
            },
        ]
    }
}

/// A single request/response text-generation call. No retries, no streaming.
#[async_trait::async_trait]
pub trait TextGenerationClient: Send + Sync {
    async fn generate(&self, prompt: &PromptPair, model: &str) -> GenerationResult;
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(
        api_base: &str,
        api_key: impl Into<String>,
        settings: &ClientSettings,
    ) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| UpstreamError::Network(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl TextGenerationClient for OpenAiClient {
    async fn generate(&self, prompt: &PromptPair, model: &str) -> GenerationResult {
        let request = ChatCompletionRequest {
            model,
            messages: prompt.to_messages(),
        };
        let body = serde_json::to_vec(&request)
            .map_err(|err| UpstreamError::MalformedResponse(err.to_string()))?;
        engine_debug!(
            "POST {} model={} system_len={} user_len={}",
            self.endpoint,
            model,
            prompt.system.len(),
            prompt.user.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        let status = response.status();
        let text = response.text().await.map_err(UpstreamError::from_reqwest)?;
        if !status.is_success() {
            engine_warn!("Generation endpoint returned {}: {}", status, text);
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|err| UpstreamError::MalformedResponse(err.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(UpstreamError::EmptyContent)
    }
}
