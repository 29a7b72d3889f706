use std::io::{self, BufRead, Write};

use crate::config::prompt::{APOLOGY, EXIT_COMMAND, FAREWELL, PROMPT_LABEL};
use crate::llm::chat::ChatClient;
use crate::models::chat::Conversation;
use crate::typewriter::Typewriter;

/// Interactive chat loop. Reads one line per turn, sends it with the
/// accumulated history, and presents the reply. Input and output are
/// injected so the loop can run against buffers.
pub struct ChatRepl<C, R, W> {
    client: C,
    history: Conversation,
    typewriter: Typewriter,
    input: R,
    output: W,
}

impl<C, R, W> ChatRepl<C, R, W>
where
    C: ChatClient,
    R: BufRead,
    W: Write,
{
    pub fn new(
        client: C,
        history: Conversation,
        typewriter: Typewriter,
        input: R,
        output: W,
    ) -> Self {
        Self {
            client,
            history,
            typewriter,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", PROMPT_LABEL)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                // Closed stdin ends the session the same way exit() does.
                None => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    break;
                }
            };

            let message = line.trim();

            if message.eq_ignore_ascii_case(EXIT_COMMAND) {
                writeln!(self.output, "{}", FAREWELL)?;
                break;
            }

            if message.is_empty() {
                continue;
            }

            self.take_turn(message).await?;
        }

        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// One Processing transition: on a usable reply, present it and record
    /// the turn; on any failure, print the fallback line and leave the
    /// history untouched.
    async fn take_turn(&mut self, message: &str) -> io::Result<()> {
        let reply = match self.client.complete(message, self.history.messages()).await {
            Ok(completion) => completion.assistant_text().map(str::to_owned),
            Err(_) => None,
        };

        match reply {
            Some(text) => {
                self.typewriter.present(&mut self.output, &text).await?;
                self.history.record_turn(message, text);
            }
            None => {
                writeln!(self.output, "{}", APOLOGY)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::config::prompt::SYSTEM_PROMPT;
    use crate::llm::chat::{ChatCompletion, ChatError};
    use crate::models::chat::ChatMessage;

    struct StubClient {
        replies: Mutex<VecDeque<Result<ChatCompletion, ChatError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn new() -> Self {
            Self {
                replies: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn reply_with(self, body: &str) -> Self {
            let completion = serde_json::from_str(body).unwrap();
            self.replies.lock().unwrap().push_back(Ok(completion));
            self
        }

        fn fail_with(self, error: ChatError) -> Self {
            self.replies.lock().unwrap().push_back(Err(error));
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatClient for StubClient {
        async fn complete(
            &self,
            message: &str,
            _history: &[ChatMessage],
        ) -> Result<ChatCompletion, ChatError> {
            self.calls.lock().unwrap().push(message.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("stub ran out of scripted replies")
        }
    }

    fn repl_over(
        client: StubClient,
        input: &str,
    ) -> ChatRepl<StubClient, &[u8], Vec<u8>> {
        ChatRepl::new(
            client,
            Conversation::new(SYSTEM_PROMPT),
            Typewriter::new(Duration::ZERO),
            input.as_bytes(),
            Vec::new(),
        )
    }

    fn output_of(repl: &ChatRepl<StubClient, &[u8], Vec<u8>>) -> String {
        String::from_utf8(repl.output.clone()).unwrap()
    }

    #[tokio::test]
    async fn round_trip_presents_reply_and_records_turn() {
        let client = StubClient::new().reply_with(r#"{"choices":[{"message":{"content":"4"}}]}"#);
        let mut repl = repl_over(client, "What is 2+2?\nexit()\n");

        repl.run().await.unwrap();

        assert_eq!(
            repl.history.messages(),
            &[
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user("What is 2+2?"),
                ChatMessage::assistant("4"),
            ]
        );
        assert_eq!(output_of(&repl), "\nYou: \nGrok: 4\n\nYou: Goodbye!\n");
    }

    #[tokio::test]
    async fn exit_command_skips_the_client_in_any_letter_case() {
        let mut repl = repl_over(StubClient::new(), "EXIT()\n");

        repl.run().await.unwrap();

        assert_eq!(repl.client.call_count(), 0);
        assert!(output_of(&repl).ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn blank_lines_are_discarded_without_a_request() {
        let mut repl = repl_over(StubClient::new(), "   \n\nexit()\n");

        repl.run().await.unwrap();

        assert_eq!(repl.client.call_count(), 0);
        assert_eq!(repl.history.messages().len(), 1);
    }

    #[tokio::test]
    async fn failed_request_prints_apology_and_keeps_history() {
        let client = StubClient::new().fail_with(ChatError::Api {
            status: 500,
            body: "upstream blew up".to_string(),
        });
        let mut repl = repl_over(client, "hello\nexit()\n");

        repl.run().await.unwrap();

        assert!(output_of(&repl)
            .contains("\nGrok: Sorry, I encountered an error processing your request.\n"));
        assert_eq!(repl.history.messages().len(), 1);
    }

    #[tokio::test]
    async fn reply_without_choices_counts_as_a_failed_turn() {
        let client = StubClient::new().reply_with(r#"{"choices":[]}"#);
        let mut repl = repl_over(client, "hello\nexit()\n");

        repl.run().await.unwrap();

        assert!(output_of(&repl).contains("Sorry, I encountered an error"));
        assert_eq!(repl.history.messages().len(), 1);
    }

    #[tokio::test]
    async fn closed_input_ends_the_session_with_a_farewell() {
        let mut repl = repl_over(StubClient::new(), "");

        repl.run().await.unwrap();

        assert_eq!(repl.client.call_count(), 0);
        assert_eq!(output_of(&repl), "\nYou: Goodbye!\n");
    }

    #[tokio::test]
    async fn history_grows_across_consecutive_turns() {
        let client = StubClient::new()
            .reply_with(r#"{"choices":[{"message":{"content":"first"}}]}"#)
            .reply_with(r#"{"choices":[{"message":{"content":"second"}}]}"#);
        let mut repl = repl_over(client, "one\ntwo\nexit()\n");

        repl.run().await.unwrap();

        let messages = repl.history.messages();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[3], ChatMessage::user("two"));
        assert_eq!(messages[4], ChatMessage::assistant("second"));
        assert_eq!(repl.client.calls.lock().unwrap()[1], "two");
    }
}
