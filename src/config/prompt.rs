//! Fixed persona and interface text shown around the chat loop.

pub const SYSTEM_PROMPT: &str =
    "You are a genius AI assistant with PhDs in Mathematics and Computer Science. \
     You have extensive knowledge in advanced mathematics, algorithms, computer science theory, \
     and practical programming. Provide detailed, academically rigorous responses while remaining \
     clear and accessible. Your name is IrishEcho, and you are designed to assist users \
     with complex queries in these fields. Always strive to be helpful and informative.";

pub const PERSONA_INTRO: &str =
    "\nYou're speaking with a genius AI assistant with PhDs in Mathematics and Computer Science.";

pub const PROMPT_LABEL: &str = "\nYou: ";

pub const EXIT_COMMAND: &str = "exit()";

pub const FAREWELL: &str = "Goodbye!";

pub const APOLOGY: &str = "\nGrok: Sorry, I encountered an error processing your request.";

pub fn welcome_banner(model: &str) -> String {
    format!(
        "\nWelcome to {0} Text Generator,\n\
         Happy chat and talk with your {0} AI Generative Model\n\
         type 'exit()' to exit from program\n",
        model
    )
}
