pub mod chat;

use self::chat::xai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SEARCH_MODE};

/// Connection settings for the completion endpoint. The bearer token is
/// injected here by the CLI layer; nothing below it reads the environment.
/// An empty `api_key` is sent as-is and surfaces as an ordinary failed turn
/// when the remote rejects it.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub search_mode: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            search_mode: DEFAULT_SEARCH_MODE.to_string(),
        }
    }
}
