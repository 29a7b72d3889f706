pub mod xai;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use self::xai::XAIChatClient;
use super::LlmConfig;
use crate::models::chat::ChatMessage;

/// Parsed body of a successful completion call, reduced to the fields this
/// client consults. Only the first choice is ever used; a reply without one
/// is treated as a failed turn.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    pub content: String,
}

impl ChatCompletion {
    pub fn assistant_text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

/// Single failure taxonomy: connection errors, non-2xx statuses and
/// malformed bodies are all recovered from the same way (apology line,
/// history untouched). The variants differ only in diagnostic text.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion body: {0}")]
    MalformedBody(String),
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// One request/response cycle. The payload is `history` plus a trailing
    /// user record for `message`; the caller's history is never mutated.
    async fn complete(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<ChatCompletion, ChatError>;
}

pub fn new_client(config: &LlmConfig) -> Result<XAIChatClient, ChatError> {
    XAIChatClient::from_config(config)
}
