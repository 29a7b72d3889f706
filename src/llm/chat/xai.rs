use async_trait::async_trait;
use log::error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::Serialize;

use super::{ChatClient, ChatCompletion, ChatError};
use crate::llm::LlmConfig;
use crate::models::chat::ChatMessage;

pub const DEFAULT_MODEL: &str = "grok-3-latest";
pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1/chat/completions";
pub const DEFAULT_SEARCH_MODE: &str = "auto";

#[derive(Debug)]
pub struct XAIChatClient {
    http: HttpClient,
    api_key: String,
    model: String,
    base_url: String,
    search_mode: String,
}

#[derive(Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
    search_parameters: SearchParameters,
    model: String,
}

#[derive(Serialize)]
struct SearchParameters {
    mode: String,
}

impl XAIChatClient {
    /// Builds a client with an explicit token and endpoint settings. No
    /// request timeout is configured: each turn is a single attempt with
    /// the transport's defaults.
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        search_mode: String,
    ) -> Result<Self, ChatError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_key,
            model,
            base_url,
            search_mode,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatError> {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
            config.search_mode.clone(),
        )
    }

    /// Payload for one turn: a copy of the history with the new user record
    /// appended. The caller's history is left untouched.
    fn build_request(&self, message: &str, history: &[ChatMessage]) -> ChatRequest {
        let mut messages = history.to_vec();
        messages.push(ChatMessage::user(message));

        ChatRequest {
            messages,
            search_parameters: SearchParameters {
                mode: self.search_mode.clone(),
            },
            model: self.model.clone(),
        }
    }

    async fn try_complete(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<ChatCompletion, ChatError> {
        let request = self.build_request(message, history);

        let resp = self
            .http
            .post(&self.base_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<ChatCompletion>()
            .await
            .map_err(|e| ChatError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
impl ChatClient for XAIChatClient {
    async fn complete(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<ChatCompletion, ChatError> {
        self.try_complete(message, history).await.map_err(|e| {
            error!("Chat completion request failed: {}", e);
            e
        })
    }
}
