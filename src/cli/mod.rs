use clap::Parser;

use crate::llm::chat::xai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SEARCH_MODE};
use crate::typewriter::DEFAULT_TYPING_DELAY_MS;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Chat LLM Provider Args ---
    /// API key sent as the bearer token on every chat completion request.
    #[arg(long, env = "XAI_API_KEY", default_value = "")]
    pub api_key: String,

    /// Model name for chat completion.
    #[arg(long, env = "XAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Chat completions endpoint URL.
    #[arg(long, env = "XAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Live-search mode forwarded in the request's search_parameters.
    #[arg(long, env = "XAI_SEARCH_MODE", default_value = DEFAULT_SEARCH_MODE)]
    pub search_mode: String,

    // --- Presentation Args ---
    /// Pause between printed reply characters, in milliseconds.
    #[arg(long, env = "TYPING_DELAY_MS", default_value_t = DEFAULT_TYPING_DELAY_MS)]
    pub typing_delay_ms: u64,
}
