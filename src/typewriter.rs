use std::io::{self, Write};
use std::time::Duration;

use tokio::time::sleep;

pub const DEFAULT_TYPING_DELAY_MS: u64 = 20;

const REPLY_PREFIX: &str = "\nGrok: ";

/// Prints replies one character at a time so a complete response reads
/// like a live stream.
#[derive(Debug, Clone)]
pub struct Typewriter {
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Writes the reply prefix, then each character followed by a flush
    /// and one delay pause, then a trailing newline.
    pub async fn present<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        write!(out, "{}", REPLY_PREFIX)?;
        out.flush()?;

        for ch in text.chars() {
            write!(out, "{}", ch)?;
            out.flush()?;
            sleep(self.delay).await;
        }

        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TYPING_DELAY_MS))
    }
}
