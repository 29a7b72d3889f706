pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod repl;
pub mod typewriter;

use std::error::Error;
use std::io;
use std::time::Duration;

use log::info;

use cli::Args;
use config::prompt::{welcome_banner, PERSONA_INTRO, SYSTEM_PROMPT};
use llm::LlmConfig;
use models::chat::Conversation;
use repl::ChatRepl;
use typewriter::Typewriter;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Chat Model: {}", args.model);
    info!("Endpoint: {}", args.base_url);
    info!("Search Mode: {}", args.search_mode);
    info!("Typing Delay: {}ms", args.typing_delay_ms);
    info!("-------------------------");

    let config = LlmConfig {
        api_key: args.api_key.clone(),
        model: args.model.clone(),
        base_url: args.base_url.clone(),
        search_mode: args.search_mode.clone(),
    };

    let client = llm::chat::new_client(&config)?;
    let typewriter = Typewriter::new(Duration::from_millis(args.typing_delay_ms));
    let history = Conversation::new(SYSTEM_PROMPT);

    println!("{}", welcome_banner(&args.model));
    println!("{}", PERSONA_INTRO);

    let stdin = io::stdin();
    let mut repl = ChatRepl::new(client, history, typewriter, stdin.lock(), io::stdout());
    repl.run().await?;

    Ok(())
}
